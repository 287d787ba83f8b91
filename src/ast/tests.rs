//! Unit tests for AST nodes.

use super::*;
use crate::token::Span;

#[test]
fn func_decl_without_body_is_a_forward_declaration() {
    let f = FuncDecl::for_testing("f", Type::builtin(BuiltinName::Int), vec![], None);
    assert!(f.body.is_none());
}

#[test]
fn decl_span_dispatches_by_variant() {
    let v = VarDecl {
        ty: Type::builtin(BuiltinName::Int),
        declarators: vec![],
        span: Span::new(1, 2, 1, 1),
    };
    assert_eq!(Decl::Var(v).span(), Span::new(1, 2, 1, 1));
}

#[test]
fn scoped_identifier_holds_path_segments() {
    let e = Expr::for_testing(ExprKind::ScopedIdentifier(vec![
        "a".into(),
        "b".into(),
        "c".into(),
    ]));
    match e.kind {
        ExprKind::ScopedIdentifier(path) => assert_eq!(path, vec!["a", "b", "c"]),
        _ => panic!("wrong kind"),
    }
}

#[test]
fn sizeof_of_type_has_no_expr() {
    let e = Expr::for_testing(ExprKind::Sizeof {
        is_type: true,
        ty: Some(Type::builtin(BuiltinName::Int)),
        expr: None,
    });
    match e.kind {
        ExprKind::Sizeof { is_type, ty, expr } => {
            assert!(is_type);
            assert!(ty.is_some());
            assert!(expr.is_none());
        }
        _ => panic!("wrong kind"),
    }
}

#[test]
fn block_holds_ordered_statements() {
    let block = Stmt::for_testing(StmtKind::Block(vec![
        Stmt::for_testing(StmtKind::Break),
        Stmt::for_testing(StmtKind::Continue),
    ]));
    match block.kind {
        StmtKind::Block(stmts) => assert_eq!(stmts.len(), 2),
        _ => panic!("wrong kind"),
    }
}

#[test]
fn for_loop_parts_are_all_optional_except_body() {
    let stmt = Stmt::for_testing(StmtKind::For {
        init: None,
        condition: None,
        increment: None,
        body: Box::new(Stmt::for_testing(StmtKind::Break)),
    });
    match stmt.kind {
        StmtKind::For {
            init,
            condition,
            increment,
            ..
        } => {
            assert!(init.is_none());
            assert!(condition.is_none());
            assert!(increment.is_none());
        }
        _ => panic!("wrong kind"),
    }
}

#[test]
fn builtin_equality_requires_all_attributes_to_match() {
    let a = Type::builtin(BuiltinName::Int);
    let b = Type::Builtin {
        name: BuiltinName::Int,
        is_const: true,
        is_unsigned: false,
    };
    assert!(!a.equals(&b));
    assert!(a.equals(&Type::builtin(BuiltinName::Int)));
}

#[test]
fn struct_equality_is_nominal() {
    let a = Type::Struct {
        name: "Point".into(),
        fields: vec![("x".into(), Type::builtin(BuiltinName::Int))],
    };
    let b = Type::Struct {
        name: "Point".into(),
        fields: vec![],
    };
    assert!(a.equals(&b));
}

#[test]
fn builtin_and_struct_are_never_equal() {
    let a = Type::builtin(BuiltinName::Int);
    let b = Type::Struct {
        name: "Int".into(),
        fields: vec![],
    };
    assert!(!a.equals(&b));
}

#[test]
fn find_field_looks_up_by_name() {
    let s = Type::Struct {
        name: "Point".into(),
        fields: vec![
            ("x".into(), Type::builtin(BuiltinName::Int)),
            ("y".into(), Type::builtin(BuiltinName::Int)),
        ],
    };
    assert!(s.find_field("y").is_some());
    assert!(s.find_field("z").is_none());
}

#[test]
fn void_is_recognized() {
    assert!(Type::void().is_void());
    assert!(!Type::builtin(BuiltinName::Int).is_void());
}
