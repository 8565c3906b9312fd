pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod ports;
pub mod ranking;
pub mod utils;
pub mod walker;
