use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Computes the tile layout of a JSON instance and writes it as JSON and SVG
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to lay out (walls, tile, grout, pattern and cutouts)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<instance>.json` and `sol_<instance>.svg`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Optional JSON config file, defaults are used when absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity, `debug` reports every wall and `trace` every cut
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
