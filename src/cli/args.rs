use clap::{Args as ClapArgs, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "transvoz")]
#[command(about = "Transcribe Spanish audio to normalized Spanish and English", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub args: TranscribeCliArgs,
}

#[derive(ClapArgs, Debug)]
pub struct TranscribeCliArgs {
    /// Audio file to transcribe
    pub file: PathBuf,

    /// Output JSON path (default: <stem>_es_en.json next to the audio file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Whisper model size to load (tiny, base, small, medium, large)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Source language of the audio
    #[arg(short, long)]
    pub language: Option<String>,

    /// Normalizer backend (mock, openai)
    #[arg(short, long)]
    pub normalizer: Option<String>,
}
