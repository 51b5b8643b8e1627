use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Timestamped,
    Json,
    Srt,
}

#[derive(Parser)]
#[command(
    name = "captx",
    about = "YouTube caption and transcript extractor",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Caption language code; defaults to the video's first track
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format: text (default), timestamped, json, srt
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the available caption languages instead of the transcript (ignores --lang)
    #[arg(long)]
    pub list_languages: bool,

    /// Show extraction strategy and metadata
    #[arg(short, long)]
    pub verbose: bool,
}
