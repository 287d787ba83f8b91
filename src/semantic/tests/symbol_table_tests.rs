//! Tests for the function signature and struct type tables.

use super::*;
use crate::ast::BuiltinName;
use crate::semantic::symbols::FunctionSignature;
use crate::token::Span;

#[test]
fn redefining_a_function_name_is_an_error() {
    let mut analyzer = SemanticAnalyzer::new();
    let sig = FunctionSignature {
        name: "f".into(),
        param_types: vec![],
        return_type: Type::void(),
        definition_span: Span::dummy(),
    };
    analyzer.define_function(sig.clone()).unwrap();
    assert!(analyzer.define_function(sig).is_err());
}

#[test]
fn redefining_a_struct_name_is_an_error() {
    let mut analyzer = SemanticAnalyzer::new();
    let ty = Type::Struct {
        name: "Point".into(),
        fields: vec![("x".into(), Type::builtin(BuiltinName::Int))],
    };
    analyzer.define_struct_type("Point", ty.clone(), Span::dummy()).unwrap();
    assert!(analyzer.define_struct_type("Point", ty, Span::dummy()).is_err());
}
