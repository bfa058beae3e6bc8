use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_pic::init_logging;
use log::{error, LevelFilter};
use pic2tga::{default_output, pic_to_tga, USAGE};

/// Convert a PIC image to TGA
#[derive(Parser, Debug)]
#[clap(name = "pic2tga")]
struct Args {
    /// Input filename
    #[clap(short, long, value_parser)]
    input: PathBuf,

    /// Output filename, defaults to INPUT.tga
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    #[clap(short, long, action)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Missing input and --help both end with the one-line usage and a failure status.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    match pic_to_tga(&args.input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
