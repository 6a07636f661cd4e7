pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod latest;
