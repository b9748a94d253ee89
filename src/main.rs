use clap::{Parser, Subcommand};
use log::debug;
use so::literal::{parse_values, ParseError};
use so::logger::init_logger;
use so::Assertion;
use std::process;

#[derive(Parser)]
#[clap(version = "0.1.0")]
#[clap(propagate_version = true)]
struct Args {
    /// Log every assertion that runs
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs one assertion on value literals, e.g. `check ShouldEqual 42 42u8`
    Check {
        assertion: String,
        #[clap(allow_hyphen_values = true)]
        actual: String,
        #[clap(allow_hyphen_values = true)]
        expected: Vec<String>,
    },
    /// Lists the assertions and how many comparison values each takes
    List,
}

fn print_literal_error(argument: &str, error: &ParseError) {
    eprintln!("error: {}", error);
    eprintln!("  | {}", argument);
    if let Some(offset) = error.offset() {
        let padding: String = (0..offset).map(|_| ' ').collect();
        eprintln!("  | {}^", padding);
    }
}

fn check(assertion: &str, actual: String, expected: Vec<String>) -> i32 {
    let assertion = match Assertion::from_name(assertion) {
        Some(assertion) => assertion,
        None => {
            eprintln!("error: unknown assertion '{}'", assertion);
            return 2;
        }
    };
    let mut arguments = vec![actual];
    arguments.extend(expected);
    let values = match parse_values(&arguments) {
        Ok(values) => values,
        Err((i, error)) => {
            print_literal_error(&arguments[i], &error);
            return 2;
        }
    };
    debug!("running {} with {} values", assertion.name(), values.len());
    let result = assertion.check(&values[0], &values[1..]);
    if result.is_empty() {
        println!("PASS");
        0
    } else {
        println!("{}", result);
        1
    }
}

fn main() {
    let args: Args = Args::parse();
    let logger = init_logger(args.verbose);
    let code = match args.command {
        Command::Check {
            assertion,
            actual,
            expected,
        } => check(&assertion, actual, expected),
        Command::List => {
            for assertion in Assertion::ALL.iter() {
                println!("{} ({})", assertion.name(), assertion.arity());
            }
            0
        }
    };
    drop(logger);
    process::exit(code);
}
