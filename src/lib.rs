pub mod backup;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod inventory;
pub mod mount;
pub mod prompt;
pub mod types;
pub mod util;
