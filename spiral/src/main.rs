use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bedpack::io::svg::bed_to_svg;
use clap::Parser as ClapParser;
use log::{info, warn};
use spiral::config::SpiralConfig;
use spiral::io;
use spiral::io::cli::Cli;
use spiral::io::output::SpiralOutput;
use spiral::opt::spiral::solve;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SpiralConfig::default()
        }
        Some(config_file) => {
            let file = fs::File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            serde_json::from_reader(std::io::BufReader::new(file))
                .context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed SpiralConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_job = io::read_json_job(args.input_file.as_path())?;
    let (bed, placements) = solve(&ext_job, config)?;

    {
        let output = SpiralOutput {
            job: ext_job,
            placements,
            config: SpiralConfig {
                bed_config: bed.config(),
                ..config
            },
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = bed_to_svg(&bed, config.svg_draw_options, input_file_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
