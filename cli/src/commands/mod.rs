pub mod app_log;
pub mod cli;
pub mod replay;
