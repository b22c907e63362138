//! # mcc
//!
//! Command line driver for the Micro C compiler. It reads a source file,
//! runs the lexer, parser and code generator, and writes the resulting
//! assembly to standard output (or a file). Any compiler error is reported
//! to standard error and terminates the process with a non-zero exit code.
mod cli;

use std::{error::Error, fs, process};

use log::{error, info};

use micro_c::{codegen::CodeGenerator, lexer::Lexer, parser::Parser};

use cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let source = fs::read_to_string(&args.file)?;

    info!("compiling '{}'", args.file.to_string_lossy());

    let tokens = match Lexer::new(&source).lex() {
        Ok(tokens) => tokens,
        Err(lex_error) => {
            error!("{lex_error}");
            process::exit(1);
        }
    };

    let program = match Parser::new(tokens).parse_program() {
        Ok(program) => program,
        Err(parse_error) => {
            error!("{parse_error}");
            process::exit(1);
        }
    };

    if args.dump_ast {
        info!("parsed AST:\n{}", serde_json::to_string_pretty(&program)?);
    }

    let assembly = match CodeGenerator::new().generate(&program) {
        Ok(assembly) => assembly,
        Err(codegen_error) => {
            error!("{codegen_error}");
            process::exit(1);
        }
    };

    match &args.output {
        Some(output) => fs::write(output, assembly)?,
        None => print!("{assembly}"),
    }

    Ok(())
}
