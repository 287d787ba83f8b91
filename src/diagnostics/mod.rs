//! Renders lexical, syntactic, and semantic errors as source-anchored
//! reports using `ariadne`. Falls back to a plain `line:column: message`
//! line (via each error type's `Display` impl) if the rich report itself
//! fails to render.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::semantic::SemanticError;
use crate::token::Span;

pub fn report_lex_error(filename: &str, source: &str, error: &LexError) {
    print_range_report(filename, source, error.span, &error.message, &error.message, None);
}

pub fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        print_range_report(filename, source, error.span, &error.message, &error.message, None);
    }
}

pub fn report_semantic_error(filename: &str, source: &str, error: &SemanticError) {
    match error.span {
        Some(span) => print_range_report(
            filename,
            source,
            span,
            &error.short_message,
            &error.message,
            error.help.as_deref(),
        ),
        None => eprintln!("{filename}: {}", error.message),
    }
}

fn print_range_report(
    filename: &str,
    source: &str,
    span: Span,
    title: &str,
    label_message: &str,
    help: Option<&str>,
) {
    let end = span.end.max(span.start + 1).min(source.len());
    let start = span.start.min(end);

    let mut builder = Report::build(ReportKind::Error, (filename, start..end))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(title)
        .with_label(
            Label::new((filename, start..end))
                .with_message(label_message)
                .with_color(Color::Red),
        );
    if let Some(help) = help {
        builder = builder.with_help(help);
    }
    let report = builder.finish();

    let result = report.eprint((filename, Source::from(source)));
    if result.is_err() {
        eprintln!("{filename}:{}:{}: {label_message}", span.line, span.column);
    }
}
