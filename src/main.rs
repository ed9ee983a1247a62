use std::fs;

use clap::Parser;
use minipas::{Options, interpreter::semantic::core::RedeclarationPolicy, run_with_options};

/// minipas interprets small Pascal programs made of declarations, nested
/// procedures and arithmetic assignments, and prints the resulting globals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minipas to look at a file instead of an inline program.
    #[arg(short, long)]
    file: bool,

    /// Reject a name declared twice in the same scope instead of letting the
    /// later declaration win.
    #[arg(long)]
    strict_declarations: bool,

    /// Evaluate without running the static scope check first.
    #[arg(long)]
    skip_analysis: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level)
                                           .format_timestamp(None)
                                           .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let redeclaration = if args.strict_declarations {
        RedeclarationPolicy::Reject
    } else {
        RedeclarationPolicy::Overwrite
    };
    let options = Options { redeclaration,
                            analyze: !args.skip_analysis };

    match run_with_options(&source, &options) {
        Ok(globals) => {
            for (name, value) in &globals {
                println!("{name} = {value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
