pub mod config;
pub mod remote;
