//! Unit tests for the semantic analyzer.

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::Span;

mod symbol_table_tests;

pub(super) fn analyze(src: &str) -> Result<(), SemanticError> {
    let tokens = Lexer::new(src).tokenize().unwrap();
    let (unit, errors) = Parser::new(tokens).parse();
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    SemanticAnalyzer::new().analyze(&unit)
}

#[test]
fn display_without_span_omits_position() {
    let err = SemanticError::without_span(SemanticErrorKind::Internal, "detached error");
    assert_eq!(err.to_string(), "detached error");
}

#[test]
fn display_with_span_includes_position() {
    let err = SemanticError::undeclared_identifier("x", Span::new(0, 1, 4, 2));
    assert_eq!(err.to_string(), "4:2: undeclared identifier `x`");
}

#[test]
fn duplicate_function_carries_help_text() {
    let err = SemanticError::duplicate_function("f", 1, 1, Span::dummy());
    assert!(err.help.unwrap().contains("previously declared"));
}
