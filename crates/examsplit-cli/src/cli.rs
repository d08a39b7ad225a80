use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Split exam booklet PDFs into one cropped image per question.
#[derive(Debug, Parser)]
#[command(name = "examsplit", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract question crops from one or more booklet PDFs
    Extract {
        /// Paths to booklet PDF files
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Output root directory; each document gets a subdirectory
        #[arg(long, value_name = "DIR", default_value = "output")]
        out_dir: PathBuf,

        /// Treat pages as single-column (skip the left/right split)
        #[arg(long)]
        no_split: bool,

        /// Raster zoom factor for the question crops
        #[arg(long, default_value_t = 2.0)]
        zoom: f32,

        /// Require bold question-number markers
        #[arg(long)]
        bold_markers: bool,
    },

    /// Scrape an answer-key booklet into a JSON answer key
    Answers {
        /// Path to the answer-key PDF
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON path (default: <out-dir>/<name>_answers.json)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output root directory used when --out is not given
        #[arg(long, value_name = "DIR", default_value = "output")]
        out_dir: PathBuf,
    },

    /// Look up one answer in a saved JSON answer key
    Lookup {
        /// Path to the answer-key JSON file
        #[arg(value_name = "KEY")]
        key: PathBuf,

        /// Test-section name
        #[arg(value_name = "SECTION")]
        section: String,

        /// Question number
        #[arg(value_name = "NUMBER")]
        number: u32,
    },
}
