use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use tiler::io::export::export_solution;
use tiler::io::svg::layout_to_svg;
use tlv::config::TlvConfig;
use tlv::io::cli::Cli;
use tlv::io::output::TlvOutput;
use tlv::{io, layout_instance};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TlvConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed TlvConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let (instance, solution) = layout_instance(&ext_instance, &config)?;

    {
        let output = TlvOutput {
            instance: ext_instance,
            solution: export_solution(&solution),
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(&instance, &solution, config.svg_draw_options);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
