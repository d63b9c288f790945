//! CLI command modules

pub mod components;
pub mod convert;
pub mod info;
pub mod init;
