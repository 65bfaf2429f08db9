pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod lfm;
pub mod path;
pub mod storage;
pub mod utils;
