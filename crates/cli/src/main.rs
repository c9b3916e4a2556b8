mod command;

use crate::command::{Command, OutputFormat};
use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{Layout, LayoutConfig, Orientation};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// CLI for inspecting hex grid math: conversions between hex and pixel
/// coordinates, distances, lines, rings, and so on.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the hex->pixel layout. Supported
    /// formats: JSON, TOML. If not given, the default layout is used
    /// (pointy-topped, 10x10 hexes, centered on the pixel origin).
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the orientation from the config file. Options: pointy, flat
    #[structopt(long)]
    orientation: Option<Orientation>,

    /// The format to print results in. Options: text, json
    #[structopt(short = "f", long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut layout_config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded layout config from {:?}", config_path);
            config
        }
        None => LayoutConfig::default(),
    };
    if let Some(orientation) = opt.orientation {
        layout_config.orientation = orientation;
    }
    let layout = Layout::from_config(layout_config)?;
    info!("Using layout {:?}", layout);

    let output = opt.command.execute(&layout)?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    output.write(&mut stdout, opt.format)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
