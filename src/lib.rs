// gemini-gateway - HTTP relay from a JSON prompt endpoint to the Gemini API
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod console;
pub mod credentials;
pub mod error;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod server;
pub mod utils;
