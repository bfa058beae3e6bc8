use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_pic::init_logging;
use log::{error, LevelFilter};
use pic2tga::{load_palette, textures_to_tga, TEX_USAGE};

/// Split a texture sheet into TGA tiles
#[derive(Parser, Debug)]
#[clap(name = "tex2tga")]
struct Args {
    /// Texture sheet (16 tiles of 256x256 indices)
    #[clap(short, long, value_parser)]
    textures: PathBuf,

    /// Palette file
    #[clap(short, long, value_parser)]
    palette: PathBuf,

    #[clap(short, long, value_parser, default_value = ".")]
    output_dir: PathBuf,

    /// Write RGBA with palette index 0 transparent
    #[clap(short, long, action)]
    alpha: bool,

    #[clap(short, long, action)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{}", TEX_USAGE);
            return ExitCode::FAILURE;
        }
    };

    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let result = load_palette(&args.palette).and_then(|palette| {
        textures_to_tga(&args.textures, &palette, &args.output_dir, args.alpha)
    });
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
