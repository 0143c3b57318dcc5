use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use monkey::{
    errors::errors::Error,
    format_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::{Parser, DEFAULT_MAX_DEPTH},
};

/// Scan and parse a Monkey source file, printing its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "monkey", version, about)]
struct Cli {
    /// Source file to parse. Reads standard input when omitted.
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Maximum nesting depth of blocks and expressions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not print timings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (file_name, source) = match read_source(cli.file.as_ref()) {
        Ok(read) => read,
        Err(e) => {
            eprintln!("Error: could not read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if cli.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }

        if !cli.quiet {
            eprintln!("Tokenized in {:?}", start.elapsed());
        }
        return ExitCode::SUCCESS;
    }

    let (program, errors) = Parser::new(Lexer::new(&source))
        .with_max_depth(cli.max_depth)
        .parse_program();

    if !cli.quiet {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    println!("{}", program);

    for error in &errors {
        display_error(error, &source, &file_name);
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());

            Ok((file_name, read_to_string(path)?))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;

            Ok((String::from("<stdin>"), source))
        }
    }
}

fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        Error: UnexpectedToken (expected IDENTIFIER, found EQUAL)
        -> main.mk:20:4
           |
        20 | let = 5;
           | ----^
    */

    eprintln!("{}\n", format_error(error, source, file_name));
}
