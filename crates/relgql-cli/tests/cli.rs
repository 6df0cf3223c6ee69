//! End-to-end runs of the `relgql` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SCHEMA: &str = r#"
[[entities]]
name = "post"
columns = [
    { name = "id", type = "serial" },
    { name = "title", type = "text" },
    { name = "score", type = "numeric(5, 2)" },
]
relationships = [{ name = "author", target = "user" }]

[[entities]]
name = "user"
columns = [{ name = "id", type = "int8" }]
relationships = [{ name = "posts", target = "post", kind = "one_to_many" }]
"#;

fn relgql(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relgql"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("RELGQL_CONFIG")
        .output()
        .expect("failed to run relgql")
}

#[test]
fn generate_writes_checked_sdl() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("blog.toml");
    let out = dir.path().join("inputs.graphql");
    fs::write(&schema, SCHEMA).unwrap();

    let output = relgql(
        dir.path(),
        &[
            "generate",
            schema.to_str().unwrap(),
            "--check",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let sdl = fs::read_to_string(&out).unwrap();
    assert!(sdl.contains("input post_inc_input {"));
    assert!(sdl.contains("  score: Float\n"));
    assert!(sdl.contains("  author: user_bool_exp\n"));
    assert!(sdl.contains("  _like: String\n"));
}

#[test]
fn config_file_changes_naming() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("blog.toml");
    let config = dir.path().join("relgql.toml");
    fs::write(&schema, SCHEMA).unwrap();
    fs::write(
        &config,
        r#"
[generator]
categories = ["where"]
descriptions = false

[generator.naming]
where_suffix = "_filter"
"#,
    )
    .unwrap();

    let output = relgql(
        dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "--format",
            "sdl",
            "list",
            schema.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "post_filter\nInt_comparison_exp\nString_comparison_exp\nFloat_comparison_exp\nuser_filter\n"
    );
}

#[test]
fn show_unknown_entity_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("blog.json");
    fs::write(
        &schema,
        r#"{"entities": [{"name": "post", "columns": [{"name": "id", "type": "integer"}]}]}"#,
    )
    .unwrap();

    let output = relgql(dir.path(), &["show", schema.to_str().unwrap(), "comment", "where"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown entity: comment"));
}
