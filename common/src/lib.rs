pub mod config;
pub mod error;
pub mod network;
pub mod utils;
