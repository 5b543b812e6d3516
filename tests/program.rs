//! Integration tests for comments, whole programs and error reporting

use ying::ying::ast::{Comment, LineComment, MultiLineComment, ProgramItem, Statement};
use ying::ying::formats::{serialize_program, ToSource};
use ying::ying::parser::{parse_comment, parse_program};

const SAMPLE: &str = r#"// Shapes used by the renderer
import { Vector as Vec2 } from "package:math";

/**
 * A point on the canvas.
 */
export struct Point {
    position: Vec2;
    label: string | None;
}

type Id = int;

var origin_offset: float = 0.5 * scale;
"#;

#[test]
fn test_parse_line_comment() {
    assert_eq!(
        parse_comment("// unit test").unwrap(),
        Comment::Line(LineComment::new("// unit test"))
    );
}

#[test]
fn test_parse_multi_line_comment() {
    assert_eq!(
        parse_comment("/*\n    first\n    second\n*/").unwrap(),
        Comment::MultiLine(MultiLineComment::new(["/*", "first", "second", "*/"]))
    );
}

#[test]
fn test_parse_comment_rejects_statement() {
    let error = parse_comment("var a = 1;").unwrap_err();

    assert_eq!(error.position, 0);
    assert!(error.expects("line comment"));
    assert!(error.expects("multi-line comment"));
}

#[test]
fn test_sample_program_structure() {
    let program = parse_program(SAMPLE).unwrap();

    let kinds: Vec<&str> = program
        .items
        .iter()
        .map(|item| match item {
            ProgramItem::Comment(Comment::Line(_)) => "line-comment",
            ProgramItem::Comment(Comment::MultiLine(_)) => "multi-line-comment",
            ProgramItem::Statement(Statement::Import(_)) => "import",
            ProgramItem::Statement(Statement::Export(_)) => "export",
            ProgramItem::Statement(Statement::Type(_)) => "type",
            ProgramItem::Statement(Statement::VariableDeclaration(_)) => "variable",
            ProgramItem::Statement(_) => "other",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "line-comment",
            "import",
            "multi-line-comment",
            "export",
            "type",
            "variable"
        ]
    );
}

#[test]
fn test_documentation_comment_in_program() {
    let program = parse_program(SAMPLE).unwrap();

    let documentation: Vec<&MultiLineComment> = program
        .comments()
        .filter_map(|comment| match comment {
            Comment::MultiLine(comment) if comment.is_documentation() => Some(comment),
            _ => None,
        })
        .collect();

    assert_eq!(documentation.len(), 1);
    assert_eq!(documentation[0].lines[1], "* A point on the canvas.");
}

#[test]
fn test_sample_program_prints_and_reparses() {
    let program = parse_program(SAMPLE).unwrap();
    let printed = program.to_source();

    assert_eq!(parse_program(&printed).unwrap(), program);
}

#[test]
fn test_sample_program_source_output() {
    let program = parse_program(SAMPLE).unwrap();

    insta::assert_snapshot!(program.to_source(), @r###"
    // Shapes used by the renderer
    import { Vector as Vec2 } from "package:math";
    /**
    * A point on the canvas.
    */
    export struct Point {
        position: Vec2;
        label: string | None;
    }
    type Id = int;
    var origin_offset: float = 0.5 * scale;
    "###);
}

#[test]
fn test_tag_output_for_import() {
    let program = parse_program(r#"import { a as b } from "lib";"#).unwrap();

    insta::assert_snapshot!(serialize_program(&program), @r###"
    <program>
      <import>lib<children>
        <name>a<children>
          <alias>b</alias>
        </children></name>
      </children></import>
    </program>
    "###);
}

#[test]
fn test_error_location_in_program() {
    let source = "var a = 1;\nvar b = 2\nvar c = 3;";
    let error = parse_program(source).unwrap_err();

    assert_eq!(error.position, 21);
    assert_eq!(error.location(source), (3, 1));
    assert!(error.expects("';'"));
    assert_eq!(error.found.as_deref(), Some("'var'"));
}

#[test]
fn test_unknown_character_is_reported() {
    let source = "var a = 1 # 2;";
    let error = parse_program(source).unwrap_err();

    assert_eq!(error.position, 10);
    assert_eq!(error.found.as_deref(), Some("'#'"));
}

#[test]
fn test_unterminated_comment() {
    let error = parse_program("var a = 1;\n/* open").unwrap_err();

    assert_eq!(error.position, 11);
}
