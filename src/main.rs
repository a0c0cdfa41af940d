use caption_lang::cli::{self, CliError, EvalOptions, EvalResult};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "caption")]
#[command(about = "Caption - a tiny expression language for computing window captions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and evaluate a caption expression
    Eval {
        /// The expression to evaluate
        expression: String,

        /// Variable binding, repeatable: name=value ("true"/"false" bind booleans)
        #[arg(short, long = "var")]
        var: Vec<String>,

        /// JSON object of variable bindings (reads from stdin if piped)
        #[arg(short, long)]
        json: Option<String>,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Dump the token stream of an expression
    Tokens {
        /// The expression to tokenize
        expression: String,

        /// Surface comments as tokens instead of skipping them
        #[arg(long)]
        comments: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            expression,
            var,
            json,
            syntax_only,
        } => run_eval(expression, var, json, syntax_only),
        Commands::Tokens {
            expression,
            comments,
        } => match cli::dump_tokens(&expression, comments) {
            Ok(listing) => {
                print!("{}", listing);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(
    expression: String,
    vars: Vec<String>,
    json: Option<String>,
    syntax_only: bool,
) -> Result<(), CliError> {
    let json = match json {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            if buffer.trim().is_empty() {
                None
            } else {
                Some(buffer)
            }
        }
        None => None,
    };

    let options = EvalOptions {
        expression,
        vars,
        json,
        syntax_only,
    };

    match cli::execute_eval(&options)? {
        EvalResult::SyntaxValid => println!("Syntax is valid"),
        EvalResult::Rendered(text) => println!("{}", text),
    }
    Ok(())
}
