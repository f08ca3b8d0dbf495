mod args;
mod transcribe;

pub use args::{Cli, TranscribeCliArgs};
pub use transcribe::handle_transcribe_command;
