pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{generate, generate_from_str, parse_uuid, ParseError};
pub use crate::domain::{model::Uuid, namespace};
pub use crate::utils::error::{Result, Uuid5Error};
