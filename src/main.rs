use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use scopelang::{run, write_banner};

/// scopelang runs programs made of integer assignments, prints and nested
/// scopes, one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the program from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skips the startup banner, leaving only program output on standard
    /// output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}. Perhaps this file does not exist?",
                          path.display());
                std::process::exit(1);
            },
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut output = io::stdout().lock();

    if !args.quiet
       && let Err(e) = write_banner(&mut output)
    {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(input, &mut output) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
