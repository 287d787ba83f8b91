//! Command-line entry point.

use clap::Parser as ClapParser;
use cminor::driver;

/// Compiles a source file and reports any lexical, syntactic, or semantic errors.
#[derive(ClapParser)]
#[command(name = "cminor")]
#[command(about = "Front end for a small statically-typed imperative language", long_about = None)]
struct Cli {
    /// The source file to compile.
    file: String,

    /// Print the parsed AST before running semantic analysis.
    #[arg(long = "dump-ast")]
    dump_ast: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = driver::compile_file(&cli.file, cli.dump_ast);
    std::process::exit(exit_code);
}
