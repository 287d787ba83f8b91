//! Orchestrates the pipeline for the CLI: read the file, lex, parse,
//! analyze, report diagnostics, and produce the process exit code.

use crate::diagnostics;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::semantic::SemanticAnalyzer;

/// Runs the whole pipeline against a source file on disk.
///
/// Returns the process exit code: `0` on success, `1` on any I/O, lexical,
/// syntactic, or semantic failure. Diagnostics are printed to stderr as a
/// side effect (and the AST to stdout, if `dump_ast` is set).
pub fn compile_file(path: &str, dump_ast: bool) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{path}: {err}");
            return 1;
        }
    };
    compile_source(path, &source, dump_ast)
}

fn compile_source(filename: &str, source: &str, dump_ast: bool) -> i32 {
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            diagnostics::report_lex_error(filename, source, &err);
            return 1;
        }
    };

    let (unit, parse_errors) = Parser::new(tokens).parse();
    if !parse_errors.is_empty() {
        diagnostics::report_parse_errors(filename, source, &parse_errors);
        return 1;
    }

    if dump_ast {
        println!("{unit:#?}");
    }

    match SemanticAnalyzer::new().analyze(&unit) {
        Ok(()) => 0,
        Err(err) => {
            diagnostics::report_semantic_error(filename, source, &err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_program_exits_zero() {
        let code = compile_source("test.cm", "int f() { return 0; }", false);
        assert_eq!(code, 0);
    }

    #[test]
    fn lexical_error_exits_nonzero() {
        let code = compile_source("test.cm", "int x = 'ab';", false);
        assert_eq!(code, 1);
    }

    #[test]
    fn parse_error_exits_nonzero() {
        let code = compile_source("test.cm", "int ;", false);
        assert_eq!(code, 1);
    }

    #[test]
    fn semantic_error_exits_nonzero() {
        let code = compile_source("test.cm", "int f() { return undeclared; }", false);
        assert_eq!(code, 1);
    }

    #[test]
    fn missing_file_exits_nonzero() {
        let code = compile_file("/nonexistent/path/to/source.cm", false);
        assert_eq!(code, 1);
    }
}
