//! Tests for the expression grammar: precedence, associativity, and the
//! cast/group and dot/arrow disambiguations.

use super::*;
use crate::ast::{AccessKind, BinaryOp, ExprKind};

#[test]
fn multiplication_binds_tighter_than_addition() {
    let e = parse_expr("1 + 2 * 3");
    match e.kind {
        ExprKind::Binary { op: BinaryOp::Add, right, .. } => {
            assert!(matches!(right.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
        }
        _ => panic!("expected addition at the top"),
    }
}

#[test]
fn additive_operators_are_left_associative() {
    let e = parse_expr("1 - 2 - 3");
    match e.kind {
        ExprKind::Binary { op: BinaryOp::Sub, left, .. } => {
            assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
        }
        _ => panic!("expected subtraction at the top"),
    }
}

#[test]
fn assignment_is_right_associative() {
    let e = parse_expr("a = b = c");
    match e.kind {
        ExprKind::Assignment { right, .. } => {
            assert!(matches!(right.kind, ExprKind::Assignment { .. }));
        }
        _ => panic!("expected assignment at the top"),
    }
}

#[test]
fn invalid_lvalue_is_rejected() {
    let mut p = make("1 = 2");
    assert!(p.parse_expr().is_err());
}

#[test]
fn scoped_identifier_collects_all_segments() {
    let e = parse_expr("a::b::c");
    match e.kind {
        ExprKind::ScopedIdentifier(path) => assert_eq!(path, vec!["a", "b", "c"]),
        _ => panic!("expected scoped identifier"),
    }
}

#[test]
fn cast_is_recognized_before_registered_struct_type() {
    let mut p = make("(int) x");
    let e = p.parse_expr().unwrap();
    assert!(matches!(e.kind, ExprKind::Cast { .. }));
}

#[test]
fn parenthesized_non_type_expression_is_a_group() {
    let e = parse_expr("(x + 1)");
    assert!(matches!(e.kind, ExprKind::Group(_)));
}

#[test]
fn member_access_accepts_dot_and_arrow_as_synonyms() {
    let dot = parse_expr("p.x");
    let arrow = parse_expr("p->x");
    assert!(matches!(dot.kind, ExprKind::MemberAccess { access: AccessKind::Dot, .. }));
    assert!(matches!(arrow.kind, ExprKind::MemberAccess { access: AccessKind::Arrow, .. }));
}

#[test]
fn sizeof_of_registered_struct_type_is_recognized() {
    let mut p = make("sizeof(Point)");
    p.register_struct_name("Point");
    let e = p.parse_expr().unwrap();
    match e.kind {
        ExprKind::Sizeof { is_type, .. } => assert!(is_type),
        _ => panic!("expected sizeof"),
    }
}

#[test]
fn sizeof_of_expression_is_recognized() {
    let e = parse_expr("sizeof(1 + 2)");
    match e.kind {
        ExprKind::Sizeof { is_type, expr, .. } => {
            assert!(!is_type);
            assert!(expr.is_some());
        }
        _ => panic!("expected sizeof"),
    }
}

#[test]
fn ternary_branches_are_right_associative() {
    let e = parse_expr("a ? b : c ? d : e");
    match e.kind {
        ExprKind::Ternary { else_branch, .. } => {
            assert!(matches!(else_branch.kind, ExprKind::Ternary { .. }));
        }
        _ => panic!("expected ternary"),
    }
}
