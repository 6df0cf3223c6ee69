use serde::{Deserialize, Serialize};
use std::fmt;

/// Native column type as reported by the database or a schema description.
///
/// Type strings are matched case-insensitively against common SQL spellings.
/// Length and precision modifiers (`varchar(255)`, `numeric(10,2)`) are
/// ignored. Anything unrecognised is kept verbatim in [`ColumnType::Other`]
/// so that the scalar mapping can reject it with the original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    SmallInteger,
    Integer,
    BigInteger,
    Float,
    Numeric,
    Boolean,
    String,
    Text,
    Date,
    DateTime,
    Time,
    Uuid,
    Other(String),
}

impl ColumnType {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        let base = normalized
            .split('(')
            .next()
            .unwrap_or_default()
            .trim();

        match base {
            "smallint" | "int2" | "smallinteger" => Self::SmallInteger,
            "int" | "int4" | "integer" | "serial" => Self::Integer,
            "bigint" | "int8" | "biginteger" | "bigserial" => Self::BigInteger,
            "float" | "float4" | "float8" | "real" | "double" | "double precision" => {
                Self::Float
            }
            "numeric" | "decimal" => Self::Numeric,
            "bool" | "boolean" => Self::Boolean,
            "string" | "varchar" | "character varying" | "char" | "character" => Self::String,
            "text" => Self::Text,
            "date" => Self::Date,
            "datetime" | "timestamp" | "timestamptz" | "timestamp with time zone" => {
                Self::DateTime
            }
            "time" | "timetz" => Self::Time,
            "uuid" => Self::Uuid,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Integer and floating point families support increment semantics.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::SmallInteger | Self::Integer | Self::BigInteger)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::SmallInteger => write!(f, "smallint"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::BigInteger => write!(f, "bigint"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::DateTime => write!(f, "datetime"),
            ColumnType::Time => write!(f, "time"),
            ColumnType::Uuid => write!(f, "uuid"),
            ColumnType::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for ColumnType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ColumnType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        value.to_string()
    }
}

/// A single column of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.column_type.is_numeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(ColumnType::parse("INT4"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("varchar(255)"), ColumnType::String);
        assert_eq!(ColumnType::parse("numeric(10, 2)"), ColumnType::Numeric);
        assert_eq!(ColumnType::parse("timestamptz"), ColumnType::DateTime);
        assert_eq!(ColumnType::parse(" Boolean "), ColumnType::Boolean);
    }

    #[test]
    fn test_unknown_type_keeps_spelling() {
        assert_eq!(
            ColumnType::parse("JSONB"),
            ColumnType::Other("JSONB".to_string())
        );
        assert_eq!(ColumnType::parse("JSONB").to_string(), "JSONB");
    }

    #[test]
    fn test_numeric_families() {
        assert!(ColumnType::SmallInteger.is_numeric());
        assert!(ColumnType::BigInteger.is_numeric());
        assert!(ColumnType::Numeric.is_numeric());
        assert!(ColumnType::Float.is_float());
        assert!(!ColumnType::Text.is_numeric());
        assert!(!ColumnType::Boolean.is_numeric());
        assert!(!ColumnType::Other("money".into()).is_numeric());
    }

    #[test]
    fn test_column_serde() {
        let column: Column = serde_json::from_str(r#"{"name": "views", "type": "bigint"}"#).unwrap();
        assert_eq!(column, Column::new("views", ColumnType::BigInteger));
        assert!(column.is_numeric());

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "bigint");
    }
}
