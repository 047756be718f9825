pub mod config;
pub mod pipeline;
pub mod server;
pub mod utils;
