//! Command-line arguments for the `sculpt` tool.

use clap::{Parser, Subcommand};
use sculpt_shape::Adjacency;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sculpt")]
#[command(about = "Inspect, validate and author voxel shape files", long_about = None)]
pub struct Cli {
    /// Editor settings (TOML). Built-in defaults are used when omitted
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check the JSON structure of a shape file without decoding it
    Check { file: PathBuf },

    /// Decode a shape file and check that its voxels form one piece
    Validate {
        file: PathBuf,

        /// Adjacency rule: face, edge or corner (defaults to the configured rule)
        #[arg(long)]
        rule: Option<Adjacency>,
    },

    /// Print grid size, voxel count, parts and metadata
    Info { file: PathBuf },

    /// Pad or crop a shape to a new grid size, keeping it centered
    Resize {
        file: PathBuf,

        #[arg(short, long)]
        size: usize,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Write a starter shape: one centered voxel, or a full cube with --fill
    New {
        #[arg(short, long)]
        size: Option<usize>,

        #[arg(long)]
        fill: bool,

        #[arg(long)]
        difficulty: Option<i64>,

        #[arg(long)]
        max_moves: Option<i64>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
