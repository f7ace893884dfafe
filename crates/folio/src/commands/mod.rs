//! CLI commands.

pub mod build;
pub mod capture;
pub mod init;
