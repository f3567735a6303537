//! Tolerant parsing of Windows phonebook (.pbk) VPN configuration files.
//!
//! Phonebook files are loosely INI-formatted, written by many Windows
//! versions in several text encodings, and frequently carry dialect quirks
//! (header-less leading content, duplicate keys, stray lines). This crate
//! reads them anyway and produces a uniform record per VPN entry.
//!
//! The crate is organized into three modules:
//!
//! - [`decode`] — Read a file of unknown encoding into a `String`
//! - [`ini`] — Tolerant sectioned key-value parsing
//! - [`phonebook`] — VPN entry extraction into [`ConnectionRecord`]s
//!
//! Only two failures cross the crate boundary: a missing input file and an
//! undecodable one (plus the underlying I/O error for unreadable files).
//! Everything else degrades gracefully per the source format's realities.

pub mod decode;
pub mod ini;
pub mod phonebook;

pub use decode::{read_to_string, ParseError};
pub use ini::{parse_ini, IniDocument, IniSection};
pub use phonebook::{parse_file, ConnectionRecord};
