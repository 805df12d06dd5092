//! # Jot
//!
//! This binary is the front-end driver for Jot. It reads a program
//! from an expression flag, a file, or standard input, parses it, and
//! dumps the AST as YAML or JSON.

mod cli;

use cli::*;

use std::{error::Error, fs, io::Read, process};

use log::{debug, error};

use jot_lang::{dumper, parser};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level(args.verbosity.into()).unwrap();

    let source = if let Some(expression) = args.expression {
        expression
    } else if let Some(file) = args.file {
        fs::read_to_string(&file)?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let program = match parser::parse(&source) {
        Ok(program) => program,
        Err(syntax_error) => {
            error!("{syntax_error}");
            process::exit(1);
        }
    };

    debug!("parsed {} top-level statements", program.body.len());

    let out = dumper::dump(&program, args.format.into())?;
    println!("{out}");

    Ok(())
}
