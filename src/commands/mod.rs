//! CLI commands for ramal

pub mod dispatch;
pub mod find;
pub mod remove;
pub mod route;
pub mod stations;
