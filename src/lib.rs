pub mod cli;
pub mod config;
pub mod global;
pub mod llm;
pub mod normalizer;
pub mod output;
pub mod pipeline;
pub mod speech;
