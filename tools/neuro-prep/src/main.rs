//! NeuroFinder 数据集准备命令行工具.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod report;
mod runner;

#[derive(Debug, Parser)]
#[command(name = "neuro-prep", version, about = "NeuroFinder dataset preparation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Download, extract and organize the dataset, then render train masks.
    ///
    /// Configuration comes from `$NEURO_CONFIG`, or defaults with the data
    /// directory taken from `$NEURO_DATA_DIR` / `$HOME/dataset/neuron_dataset`.
    Setup {
        /// Fetch archives from this local directory instead of the remote bucket.
        #[arg(long)]
        mirror: Option<PathBuf>,
    },

    /// Rasterize a `regions.json` file into a mask image.
    ToMask {
        /// Input regions file.
        regions: PathBuf,
        /// Output image path (PNG).
        out: PathBuf,
        /// Mask height.
        #[arg(long, default_value_t = 512)]
        height: usize,
        /// Mask width.
        #[arg(long, default_value_t = 512)]
        width: usize,
    },

    /// Vectorize mask images into a records JSON file; dataset names are file stems.
    ToRegions {
        /// Input mask images.
        #[arg(required = true)]
        masks: Vec<PathBuf>,
        /// Output records file.
        #[arg(long, short)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    utils::init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Setup { mirror } => runner::setup(mirror),
        Command::ToMask {
            regions,
            out,
            height,
            width,
        } => runner::to_mask(&regions, &out, (height, width)),
        Command::ToRegions { masks, out } => runner::to_regions(&masks, &out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
