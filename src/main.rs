//! The Slug programming language compiler CLI.
//!
//! This binary compiles a `.slg` source file into a native object file,
//! delegating the pipeline to the driver module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Slug compiler.
#[derive(Parser)]
#[command(name = "slug")]
#[command(version)]
#[command(about = "The Slug programming language compiler", long_about = None)]
struct Cli {
    /// The source file to compile (e.g., `hello.slg`).
    file: String,

    /// Output path for the object file (e.g., `-o hello.o`).
    /// If not specified, uses the input filename with an `.o` extension.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Print the parsed AST to stdout before code generation.
    #[arg(long = "print-ast")]
    print_ast: bool,
}

/// Entry point for the Slug compiler.
fn main() {
    let cli = Cli::parse();

    if let Err(error) = driver::build(&cli.file, cli.output.as_deref(), cli.print_ast) {
        diagnostics::report_error(error.filename(), error.source(), error.error());
        std::process::exit(1);
    }
}
