pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{BuildVerError, Result};
pub use resolver::{Resolution, VersionResolver};
