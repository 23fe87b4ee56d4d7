use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlens-train")]
#[command(
    author,
    version,
    about = "Train and query the moodlens emotion classifier"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier bank from a labeled CSV and write artifacts
    Train {
        /// Path to the labeled CSV dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Directory to write model artifacts into
        #[arg(short, long, default_value = "./artifacts")]
        out_dir: PathBuf,

        /// Name of the free-text column
        #[arg(long, default_value = crate::dataset::DEFAULT_TEXT_COLUMN)]
        text_column: String,

        /// Minimum document frequency for vocabulary terms
        #[arg(long)]
        min_df: Option<usize>,

        /// Vocabulary size cap
        #[arg(long)]
        max_vocabulary: Option<usize>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify a single text with previously trained artifacts
    Predict {
        /// Directory holding model artifacts
        #[arg(short, long, default_value = "./artifacts")]
        artifacts: PathBuf,

        /// Text to classify
        #[arg(short, long)]
        text: String,

        /// Probability threshold for label membership
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Print the full ranked confidence list instead of member labels
        #[arg(long)]
        ranked: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
