//! Windows VPN phonebook to Apple configuration profile conversion.
//!
//! Built on [`pbk_core`] for phonebook parsing, this crate maps each
//! connection record onto the Apple managed-VPN payload schema and assembles
//! the payloads into a single `.mobileconfig` property-list document.
//!
//! - [`profile`] — Record-to-payload translation and profile assembly
//! - [`convert`] — The conversion pipeline behind the CLI
//! - [`cli`] — Command-line argument definitions

pub mod cli;
pub mod convert;
pub mod profile;
