use std::fs;
use std::path::Path;

use codegen::{CodegenError, FormatError, Formatter, PassthroughFormatter};
use ir::Document;
use pipeline::{generate, generate_from_file, GenerationContext, PipelineError};
use tempfile::tempdir;

const USER_ROLE_DMMF: &str = r#"{
  "datamodel": {
    "models": [
      {
        "name": "User",
        "fields": [
          { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true, "isList": false },
          { "name": "email", "kind": "scalar", "type": "String", "isRequired": true, "isList": false },
          { "name": "nickname", "kind": "scalar", "type": "String", "isRequired": false, "isList": false },
          { "name": "role", "kind": "enum", "type": "Role", "isRequired": true, "isList": false },
          { "name": "posts", "kind": "object", "type": "Post", "isRequired": true, "isList": true }
        ]
      }
    ],
    "enums": [
      { "name": "Role", "values": [ { "name": "ADMIN" }, { "name": "MEMBER" } ] }
    ]
  }
}"#;

const USER_ROLE_TS: &str = "export interface User {
  id: number;
  email: string;
  nickname: string | null;
  role: Role;
}

export const Role = {
  ADMIN: \"ADMIN\",
  MEMBER: \"MEMBER\",
} as const;
export type Role = (typeof Role)[keyof typeof Role];
";

/// Formatter that always fails, standing in for a formatter rejecting its input
struct RejectingFormatter;

impl Formatter for RejectingFormatter {
    fn name(&self) -> &str { "rejecting" }

    fn format(&self, _source: &str) -> Result<String, FormatError> { Err(FormatError::EmptyCommand) }
}

/// Formatter that appends a marker so tests can tell formatted output apart
struct MarkingFormatter;

impl Formatter for MarkingFormatter {
    fn name(&self) -> &str { "marking" }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(format!("{source}// formatted\n"))
    }
}

fn context(out_dir: &Path, formatter: Box<dyn Formatter>) -> GenerationContext {
    GenerationContext::builder()
        .output_dir(out_dir.to_path_buf())
        .formatter(formatter)
        .build()
        .expect("Context should build")
}

#[test]
fn test_generate_user_role() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let out_dir = tmp.path().join("types");
    let document = Document::from_json(USER_ROLE_DMMF).expect("DMMF should parse");

    let report = generate(&document, &context(&out_dir, Box::new(PassthroughFormatter)))
        .expect("Generation should succeed");

    assert_eq!(report.output_path, out_dir.join("index.ts"));
    assert_eq!(report.models, 1);
    assert_eq!(report.enums, 1);
    assert_eq!(report.fields, 4);
    let contents = fs::read_to_string(&report.output_path).expect("index.ts should exist");
    assert_eq!(contents, USER_ROLE_TS);
}

#[test]
fn test_generate_is_idempotent() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let document = Document::from_json(USER_ROLE_DMMF).expect("DMMF should parse");
    let ctx = context(tmp.path(), Box::new(PassthroughFormatter));

    let first = generate(&document, &ctx).expect("First run should succeed");
    let first_bytes = fs::read(&first.output_path).expect("file exists");
    let second = generate(&document, &ctx).expect("Second run should succeed");
    let second_bytes = fs::read(&second.output_path).expect("file exists");

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_formatted_text_is_what_gets_written() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let document = Document::from_json(USER_ROLE_DMMF).expect("DMMF should parse");

    let report = generate(&document, &context(tmp.path(), Box::new(MarkingFormatter)))
        .expect("Generation should succeed");

    let contents = fs::read_to_string(report.output_path).expect("file exists");
    assert_eq!(contents, format!("{USER_ROLE_TS}// formatted\n"));
}

#[test]
fn test_formatter_output_is_not_rewritten() {
    struct PaddingFormatter;

    impl Formatter for PaddingFormatter {
        fn name(&self) -> &str { "padding" }

        fn format(&self, source: &str) -> Result<String, FormatError> {
            Ok(format!("{source}   \n\n"))
        }
    }

    let tmp = tempdir().expect("Failed to create temp dir");
    let document = Document::from_json(USER_ROLE_DMMF).expect("DMMF should parse");

    let report = generate(&document, &context(tmp.path(), Box::new(PaddingFormatter)))
        .expect("Generation should succeed");

    let contents = fs::read_to_string(report.output_path).expect("file exists");
    assert_eq!(contents, format!("{USER_ROLE_TS}   \n\n"));
}

#[test]
fn test_generate_nullable_list_scenario() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let document = Document::from_json(
        r#"{
          "datamodel": {
            "models": [
              {
                "name": "User",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "String", "isRequired": true, "isList": false, "isId": true },
                  { "name": "tags", "kind": "scalar", "type": "String", "isRequired": false, "isList": true },
                  { "name": "role", "kind": "enum", "type": "Role", "isRequired": true, "isList": false }
                ]
              }
            ],
            "enums": [
              { "name": "Role", "values": [ { "name": "ADMIN" }, { "name": "MEMBER" } ] }
            ]
          }
        }"#,
    )
    .expect("DMMF should parse");

    let report = generate(&document, &context(tmp.path(), Box::new(PassthroughFormatter)))
        .expect("Generation should succeed");

    assert_eq!((report.models, report.enums, report.fields), (1, 1, 3));
    let contents = fs::read_to_string(report.output_path).expect("index.ts should exist");
    assert_eq!(
        contents,
        "export interface User {
  id: string;
  tags: (string | null)[];
  role: Role;
}

export const Role = {
  ADMIN: \"ADMIN\",
  MEMBER: \"MEMBER\",
} as const;
export type Role = (typeof Role)[keyof typeof Role];
"
    );
}

#[test]
fn test_formatter_failure_creates_nothing() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let out_dir = tmp.path().join("types");
    let document = Document::from_json(USER_ROLE_DMMF).expect("DMMF should parse");

    let err = generate(&document, &context(&out_dir, Box::new(RejectingFormatter)))
        .expect_err("Formatter failure must abort");
    assert!(matches!(err, PipelineError::Codegen(CodegenError::Format(_))));
    assert!(!out_dir.exists());
}

#[test]
fn test_unmapped_type_leaves_existing_file() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let existing = tmp.path().join("index.ts");
    fs::write(&existing, "// previous run\n").expect("seed previous output");

    let document = Document::from_json(
        r#"{ "models": [ { "name": "Place", "fields": [
            { "name": "geo", "kind": "scalar", "type": "Geometry", "isRequired": true, "isList": false }
        ] } ] }"#,
    )
    .expect("DMMF should parse");

    let err = generate(&document, &context(tmp.path(), Box::new(PassthroughFormatter)))
        .expect_err("Geometry is not mapped");
    match err {
        PipelineError::Codegen(CodegenError::UnmappedType { source, .. }) => {
            assert_eq!(source.type_name, "Geometry");
        }
        other => panic!("Expected UnmappedType error, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(existing).expect("file exists"), "// previous run\n");
}

#[test]
fn test_empty_data_model_writes_empty_file() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let document = Document::from_json(r#"{ "datamodel": { "models": [], "enums": [] } }"#)
        .expect("DMMF should parse");

    let report = generate(&document, &context(tmp.path(), Box::new(PassthroughFormatter)))
        .expect("Generation should succeed");
    assert_eq!((report.models, report.enums, report.fields), (0, 0, 0));
    assert_eq!(fs::read_to_string(report.output_path).expect("file exists"), "");
}

#[test]
fn test_generate_from_file() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let input = tmp.path().join("dmmf.json");
    fs::write(&input, USER_ROLE_DMMF).expect("write input");
    let out_dir = tmp.path().join("out");

    let report = generate_from_file(&input, &context(&out_dir, Box::new(PassthroughFormatter)))
        .expect("Generation should succeed");
    assert_eq!(fs::read_to_string(report.output_path).expect("file exists"), USER_ROLE_TS);
}

#[test]
fn test_generate_from_missing_file() {
    let tmp = tempdir().expect("Failed to create temp dir");
    let input = tmp.path().join("missing.json");

    let err = generate_from_file(&input, &context(tmp.path(), Box::new(PassthroughFormatter)))
        .expect_err("Input does not exist");
    match err {
        PipelineError::Input { path, .. } => assert_eq!(path, input),
        other => panic!("Expected Input error, got {:?}", other),
    }
}
