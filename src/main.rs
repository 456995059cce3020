use std::fs;

use clap::Parser;
use log::LevelFilter;
use numerate::{
    Calculator, Options,
    error::CalcError,
    interpreter::registry::{BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS},
};

/// numerate evaluates arithmetic expressions with operator precedence,
/// radix literals, math constants and functions, and decimal-correct
/// `+ - * /`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numerate to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream before the result.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed tree, fully parenthesized, before the result.
    #[arg(long)]
    tree: bool,

    /// Deepest nesting of parentheses, unary operators and operator chains
    /// the parser accepts.
    #[arg(long, default_value_t = Options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Lists the builtin constants and functions and exits.
    #[arg(long)]
    list: bool,

    /// Increases log output. Repeat for more detail (`-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path of the file with `--file`.
    #[arg(required_unless_present = "list")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    if args.list {
        println!("constants: {}", BUILTIN_CONSTANTS.join(" "));
        println!("functions: {}", BUILTIN_FUNCTIONS.join(" "));
        return;
    }
    let contents = args.contents.clone().unwrap_or_default();

    let calculator = Calculator::new().options(Options { max_depth: args.max_depth });

    let expressions: Vec<String> = if args.file {
        let source = fs::read_to_string(&contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{contents}'. Perhaps this \
                                    file does not exist?");
                         std::process::exit(1);
                     });
        source.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![contents]
    };

    let mut failed = false;
    for expression in &expressions {
        match run(&calculator, &args, expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Calculates one expression, printing the intermediate stages on request.
fn run(calculator: &Calculator, args: &Args, source: &str) -> Result<f64, CalcError> {
    let tokens = calculator.lex(source)?;
    if args.tokens {
        let texts: Vec<_> = tokens.iter().map(ToString::to_string).collect();
        println!("tokens: {}", texts.join(" "));
    }

    let expr = calculator.parse(&tokens)?;
    if args.tree {
        println!("tree: {expr}");
    }

    calculator.evaluate(&expr)
}
