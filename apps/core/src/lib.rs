// MindCheck core library
// Journal stress, emotion and coping-task analysis

pub mod brain;
pub mod classifier;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;

#[cfg(test)]
mod tests;
