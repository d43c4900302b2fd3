use std::ffi::OsString;
use std::io::Write;

use crate::config::CliConfig;
use crate::core::generator::generate_from_str;
use crate::domain::model::Uuid;
use crate::utils::error::Result;

/// Parses `args`, derives the UUID and writes it to `out` as one line.
///
/// Nothing is written unless every step before the write succeeded.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<Uuid>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let config = CliConfig::from_args(args)?;
    tracing::debug!("CLI config: {:?}", config);

    let namespace = config.namespace_uuid()?;
    let uuid = generate_from_str(&namespace, &config.name);
    tracing::debug!(
        "derived {} (version {}, rfc4122 variant: {})",
        uuid,
        uuid.version(),
        uuid.is_rfc4122_variant()
    );

    let line = format!("{}\n", uuid);
    out.write_all(line.as_bytes())?;
    out.flush()?;

    Ok(uuid)
}
