//! Conversion pipeline: parse the phonebook, translate every entry, and
//! write the assembled profile as an XML property list.

use anyhow::{Context, Result};
use plist::Value;

use crate::cli::Cli;
use crate::profile::ProfileBuilder;

/// Result of a conversion run that did not fail outright.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Profile written, with the number of converted VPN entries.
    Converted(usize),
    /// The phonebook parsed cleanly but contained no VPN entries; nothing
    /// was written.
    NoRecords,
}

pub fn run_convert(args: &Cli) -> Result<Outcome> {
    let records = pbk_core::parse_file(&args.input)?;
    if records.is_empty() {
        return Ok(Outcome::NoRecords);
    }

    let builder = ProfileBuilder::new(args.org.as_str(), args.identifier.as_str(), args.removable);
    let profile = builder.build_profile(&records);

    Value::Dictionary(profile)
        .to_file_xml(&args.output)
        .with_context(|| format!("failed to write profile {}", args.output.display()))?;

    Ok(Outcome::Converted(records.len()))
}
