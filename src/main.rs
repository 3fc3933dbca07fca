use std::{
    fs,
    io::{self, IsTerminal},
};

use clap::Parser;
use quadcalc::shell::{Response, Shell};

/// quadcalc is a four-function command line calculator. Without arguments it
/// starts an interactive REPL session; with piped input it evaluates one
/// calculation per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quadcalc to evaluate a file of calculations line by line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// A calculation to evaluate directly, such as '5 + 3'.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let shell = Shell::new();

    let outcome: Result<(), Box<dyn std::error::Error>> = if let Some(contents) = args.contents {
        if args.file {
            let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });

            shell.run_batch(script.as_bytes()).map_err(Into::into)
        } else {
            if let Response::Message(text) = shell.process_line(&contents) {
                println!("{text}");
            }

            Ok(())
        }
    } else {
        let stdin = io::stdin();

        if stdin.is_terminal() {
            shell.run().map_err(Into::into)
        } else {
            shell.run_batch(stdin.lock()).map_err(Into::into)
        }
    };

    if let Err(e) = outcome {
        eprintln!("Unexpected error in main loop: {e}");
        std::process::exit(1);
    }
}
