use clap::{Parser, Subcommand};
use std::process::ExitCode;

use kurry_curry::{create, Applied, Module, Options};
use kurry_driver::parse_args;
use kurry_types::arguments;

#[derive(Parser)]
#[command(
    name = "kurry",
    version = "0.1.0",
    about = "Inspect and apply type-checked curried functions",
    long_about = "Applies the functions of the kurry prelude to JSON arguments,\n\
                  checking every argument against the function's signature."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every function with its signature
    List,

    /// Show the signature of one function
    Sig {
        /// Function name
        name: String,
    },

    /// Apply a function to arguments
    Call {
        /// Function name
        name: String,

        /// Arguments as JSON; `__` is the placeholder, `@name` a function or type
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,

        /// Skip argument type checking
        #[arg(long)]
        unchecked: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = match Options::from_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::List => list_command(&create(options)),
        Commands::Sig { name } => sig_command(&create(options), &name),
        Commands::Call {
            name,
            args,
            unchecked,
            verbose,
        } => {
            let options = if unchecked {
                options.with_check_types(false)
            } else {
                options
            };
            call_command(&create(options), &name, &args, verbose)
        }
    }
}

fn list_command(module: &Module) -> ExitCode {
    for function in module.functions() {
        println!("{}", function.signature());
    }
    ExitCode::SUCCESS
}

fn sig_command(module: &Module, name: &str) -> ExitCode {
    match module.get(name) {
        Some(function) => {
            println!("{}", function.signature());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: no function named ‘{}’", name);
            ExitCode::FAILURE
        }
    }
}

fn call_command(module: &Module, name: &str, words: &[String], verbose: bool) -> ExitCode {
    let Some(function) = module.get(name) else {
        eprintln!("error: no function named ‘{}’", name);
        return ExitCode::FAILURE;
    };

    let args = match parse_args(module, words) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if verbose {
        println!("Function: {}", function.signature());
        println!(
            "Type checking: {}",
            if module.check_types() { "enabled" } else { "disabled" }
        );
        println!("Applying {}", arguments(args.len()));
    }

    match function.apply(&args) {
        Ok(Applied::Complete(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Ok(Applied::Partial(partial)) => {
            println!(
                "{} ({} remaining)",
                partial.remaining_signature(),
                arguments(partial.arity())
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
