use crate::domain::model::Uuid;
use crate::utils::error::{Result, Uuid5Error};
use crate::utils::validation::{validate_namespace, validate_namespace_encoding};
use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str = "Usage: uuid5 <namespace-uuid> <name>";

/// Program name plus the two positionals.
const EXPECTED_ARGS: usize = 3;

#[derive(Debug, Clone, Parser)]
#[command(name = "uuid5")]
#[command(about = "Derive a name-based (version 5, SHA-1) UUID from a namespace and a name")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Namespace UUID: hyphenated, 32 hex digits, braced, or urn:uuid: form
    pub namespace: String,

    /// Name to hash, encoded as UTF-8
    pub name: String,
}

impl CliConfig {
    /// Builds the config from raw process arguments, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != EXPECTED_ARGS {
            tracing::debug!("expected 2 arguments, got {}", args.len().saturating_sub(1));
            return Err(Uuid5Error::usage());
        }
        validate_namespace_encoding(&args[1])?;

        // values like "-x" or "--" are names, not options
        args.insert(1, OsString::from("--"));

        // only the name can still fail here, as non-UTF-8
        Self::try_parse_from(args).map_err(|e| {
            tracing::debug!("argument parsing failed: {:?}", e.kind());
            Uuid5Error::usage()
        })
    }

    pub fn namespace_uuid(&self) -> Result<Uuid> {
        validate_namespace(&self.namespace)
    }
}
