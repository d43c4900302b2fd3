pub mod generator;
pub mod parser;

pub use generator::{generate, generate_from_str};
pub use parser::{parse_uuid, ParseError};
