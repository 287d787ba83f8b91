//! Semantic error types.

use crate::token::Span;

/// Broad category of a [`SemanticError`], useful for tests and tooling that
/// want to match on error shape without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
    UndeclaredIdentifier,
    UndeclaredFunction,
    UnknownType,
    Redefinition,
    TypeMismatch,
    ConditionNotBoolean,
    ReturnTypeMismatch,
    NotAStruct,
    UnknownMember,
    ArgumentCountMismatch,
    ArgumentTypeMismatch,
    InvalidLvalue,
    Internal,
}

impl SemanticErrorKind {
    /// A short, span-independent title for this category of error, used as
    /// the top-level message of a rendered report (the label carries the
    /// specific detail).
    fn title(self) -> &'static str {
        match self {
            SemanticErrorKind::UndeclaredIdentifier => "undeclared identifier",
            SemanticErrorKind::UndeclaredFunction => "undeclared function",
            SemanticErrorKind::UnknownType => "unknown type",
            SemanticErrorKind::Redefinition => "redefinition",
            SemanticErrorKind::TypeMismatch => "type mismatch",
            SemanticErrorKind::ConditionNotBoolean => "condition is not boolean",
            SemanticErrorKind::ReturnTypeMismatch => "return type mismatch",
            SemanticErrorKind::NotAStruct => "not a struct",
            SemanticErrorKind::UnknownMember => "unknown struct member",
            SemanticErrorKind::ArgumentCountMismatch => "wrong number of arguments",
            SemanticErrorKind::ArgumentTypeMismatch => "argument type mismatch",
            SemanticErrorKind::InvalidLvalue => "invalid assignment target",
            SemanticErrorKind::Internal => "internal error",
        }
    }
}

/// An error raised while checking scopes and types over the AST.
///
/// # See Also
///
/// * [`crate::lexer::LexError`]
/// * [`crate::parser::ParseError`]
#[derive(Debug, Clone)]
pub struct SemanticError {
    pub message: String,
    pub short_message: String,
    pub span: Option<Span>,
    pub help: Option<String>,
    pub kind: SemanticErrorKind,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, message: impl Into<String>, span: Span) -> Self {
        let message = message.into();
        SemanticError {
            short_message: kind.title().to_string(),
            message,
            span: Some(span),
            help: None,
            kind,
        }
    }

    pub fn without_span(kind: SemanticErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        SemanticError {
            short_message: kind.title().to_string(),
            message,
            span: None,
            help: None,
            kind,
        }
    }

    pub fn new_with_help(kind: SemanticErrorKind, message: impl Into<String>, span: Span, help: impl Into<String>) -> Self {
        let mut err = SemanticError::new(kind, message, span);
        err.help = Some(help.into());
        err
    }

    pub fn undeclared_identifier(name: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::UndeclaredIdentifier,
            format!("undeclared identifier `{name}`"),
            span,
        )
    }

    pub fn undeclared_function(name: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::UndeclaredFunction,
            format!("call to undeclared function `{name}`"),
            span,
        )
    }

    pub fn unknown_type(name: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::UnknownType,
            format!("unknown type `{name}`"),
            span,
        )
    }

    pub fn duplicate_function(name: &str, previous_line: usize, previous_column: usize, span: Span) -> Self {
        SemanticError::new_with_help(
            SemanticErrorKind::Redefinition,
            format!("function `{name}` is already declared"),
            span,
            format!("previously declared at {previous_line}:{previous_column}"),
        )
    }

    pub fn duplicate_variable(name: &str, previous_line: usize, previous_column: usize, span: Span) -> Self {
        SemanticError::new_with_help(
            SemanticErrorKind::Redefinition,
            format!("variable `{name}` is already declared in this scope"),
            span,
            format!("previously declared at {previous_line}:{previous_column}"),
        )
    }

    pub fn duplicate_struct(name: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::Redefinition,
            format!("struct `{name}` is already declared"),
            span,
        )
    }

    pub fn type_mismatch(expected: &str, found: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::TypeMismatch,
            format!("expected type `{expected}`, found `{found}`"),
            span,
        )
    }

    pub fn condition_not_boolean(found: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::ConditionNotBoolean,
            format!("condition must have type `int` or `bool`, found `{found}`"),
            span,
        )
    }

    pub fn return_type_mismatch(expected: &str, found: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::ReturnTypeMismatch,
            format!("function returns `{expected}`, but this statement returns `{found}`"),
            span,
        )
    }

    pub fn not_a_struct(found: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::NotAStruct,
            format!("member access requires a struct type, found `{found}`"),
            span,
        )
    }

    pub fn unknown_member(struct_name: &str, member: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::UnknownMember,
            format!("struct `{struct_name}` has no member `{member}`"),
            span,
        )
    }

    pub fn argument_count_mismatch(name: &str, expected: usize, found: usize, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::ArgumentCountMismatch,
            format!("function `{name}` expects {expected} argument(s), found {found}"),
            span,
        )
    }

    pub fn argument_type_mismatch(name: &str, index: usize, expected: &str, found: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::ArgumentTypeMismatch,
            format!("argument {index} of call to `{name}` expects `{expected}`, found `{found}`"),
            span,
        )
    }

    pub fn invalid_lvalue(span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::InvalidLvalue,
            "left-hand side of assignment is not a valid l-value",
            span,
        )
    }

    pub fn internal_no_scope(name: &str, span: Span) -> Self {
        SemanticError::new(
            SemanticErrorKind::Internal,
            format!("internal error: no active scope to declare `{name}` in"),
            span,
        )
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.span {
            Some(span) => write!(f, "{}:{}: {}", span.line, span.column, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SemanticError {}
