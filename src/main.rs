use cflat_lang::cli::{self, CheckOptions, CheckResult, CliError};
use cflat_lang::parser::parse_program;
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "cflat")]
#[command(about = "cflat - front end for the C-- teaching language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the syntax of a C-- source file
    Check {
        /// Source file (reads from stdin if not provided)
        file: Option<String>,
    },

    /// Parse a source file and re-emit canonical, fully parenthesized source
    Unparse {
        /// Source file (reads from stdin if not provided)
        file: Option<String>,

        /// Indentation width
        #[arg(long, default_value_t = 4)]
        tab: usize,
    },

    /// Dump the AST as JSON
    Ast {
        /// Source file (reads from stdin if not provided)
        file: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => run_check(file),
        Commands::Unparse { file, tab } => run_unparse(file, tab),
        Commands::Ast { file, pretty } => run_ast(file, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_source(file: Option<String>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(file: Option<String>) -> Result<(), CliError> {
    let source = read_source(file)?;
    let options = CheckOptions {
        source,
        syntax_only: true,
        tab: None,
    };
    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(_) => unreachable!("syntax_only never unparses"),
    }
    Ok(())
}

fn run_unparse(file: Option<String>, tab: usize) -> Result<(), CliError> {
    let source = read_source(file)?;
    let options = CheckOptions {
        source,
        syntax_only: false,
        tab: Some(tab),
    };
    match cli::execute_check(&options)? {
        CheckResult::Success(text) => print!("{}", text),
        CheckResult::SyntaxValid => unreachable!(),
    }
    Ok(())
}

fn run_ast(file: Option<String>, pretty: bool) -> Result<(), CliError> {
    let source = read_source(file)?;
    let program = parse_program(&source)?;
    let value = cli::ast_to_json(&program);
    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap();
    println!("{}", json);
    Ok(())
}
