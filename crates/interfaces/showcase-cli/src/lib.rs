pub mod commands;
pub mod render;

pub use commands::{PlayOptions, Transcript, TranscriptEntry};
