pub mod config;
pub mod preview;
pub mod serve;
pub mod services;
