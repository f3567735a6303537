//! VPN entry extraction from phonebook files.
//!
//! A phonebook groups one connection entry per section. Only sections that
//! declare a `Type` code are VPN entries; everything else (device blocks,
//! media settings) is skipped. Sibling companion files sharing the
//! phonebook's base name enrich entries on a best-effort basis.

use std::collections::BTreeMap;
use std::path::Path;

use crate::decode::{self, ParseError};
use crate::ini::{self, IniDocument, IniSection};

/// Companion-file suffixes loaded alongside the primary phonebook.
const AUX_EXTENSIONS: [&str; 3] = ["cmp", "cms", "inf"];

/// Source keys captured into named [`ConnectionRecord`] fields. Section keys
/// matching one of these case-insensitively are not duplicated into
/// `extra_fields`.
const KNOWN_KEYS: [&str; 13] = [
    "Type",
    "PhoneNumber",
    "UserName",
    "Password",
    "PreSharedKey",
    "IpDnsAddress",
    "IpDns2Address",
    "IpDnsSuffix",
    "PreferredDevice",
    "UseExtendedAuthentication",
    "AuthRestrictions",
    "DataEncryption",
    "EncryptionType",
];

/// One VPN entry extracted from a phonebook, normalized for translation.
///
/// Credential fields are never populated with real secrets; the source
/// format does not carry them in the clear and this crate would not copy
/// them if it did.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRecord {
    /// Section label; doubles as display name downstream.
    pub name: String,
    /// Numeric dial-protocol code as a string; not validated here.
    pub type_code: String,
    /// File-scoped phone number / remote address, copied into every record.
    pub remote_address: String,
    pub username: String,
    pub password: String,
    pub shared_secret: String,
    pub dns_primary: String,
    pub dns_secondary: String,
    pub dns_suffix: String,
    /// Preferred dial device, informational.
    pub device: String,
    /// Extended-authentication flag; the source defaults this to enabled.
    pub use_extended_auth: String,
    pub auth_restrictions: String,
    /// Preserved for future type-specific handling; currently untranslated.
    pub data_encryption: String,
    /// Preserved for future type-specific handling; currently untranslated.
    pub encryption_type: String,
    /// Section keys not captured by any named field above.
    pub extra_fields: BTreeMap<String, String>,
    /// Per-section overlay from the `.cms` companion file.
    pub additional_settings: BTreeMap<String, String>,
}

impl Default for ConnectionRecord {
    /// An empty record with the same fallbacks the parser applies.
    fn default() -> Self {
        Self {
            name: String::new(),
            type_code: String::new(),
            remote_address: String::new(),
            username: String::new(),
            password: String::new(),
            shared_secret: String::new(),
            dns_primary: String::new(),
            dns_secondary: String::new(),
            dns_suffix: String::new(),
            device: String::new(),
            use_extended_auth: "1".to_string(),
            auth_restrictions: String::new(),
            data_encryption: String::new(),
            encryption_type: String::new(),
            extra_fields: BTreeMap::new(),
            additional_settings: BTreeMap::new(),
        }
    }
}

/// Parse a phonebook file into its VPN entries, in section order.
///
/// A file with no qualifying sections (or no content at all) yields an empty
/// vector. Only a missing, unreadable, or undecodable primary file is an
/// error; companion-file problems and structural irregularities are
/// tolerated.
pub fn parse_file(path: &Path) -> Result<Vec<ConnectionRecord>, ParseError> {
    let mut text = decode::read_to_string(path)?;
    let auxiliary = load_auxiliary_files(path);

    // Header-less leading content still parses under the sectioned grammar.
    if !text.starts_with('[') {
        text.insert_str(0, "[DEFAULT]\n");
    }

    // The phone number is defined outside any one section's scope in the
    // source format; the last occurrence anywhere applies to every entry.
    let remote_address = scan_phone_number(&text);

    let doc = ini::parse_ini(&text);
    let cms = auxiliary.get("cms").map(|content| ini::parse_ini(content));

    let records = doc
        .sections
        .iter()
        .filter(|section| !section.get_or("Type", "").is_empty())
        .map(|section| build_record(section, &remote_address, cms.as_ref()))
        .collect();

    Ok(records)
}

fn scan_phone_number(text: &str) -> String {
    let mut number = String::new();
    for line in text.lines() {
        if let Some(value) = line.trim_start().strip_prefix("PhoneNumber=") {
            number = value.trim().to_string();
        }
    }
    number
}

/// Load companion files sharing the phonebook's base name, keyed by
/// extension. Each load is best-effort: a missing or unreadable companion is
/// skipped, never fatal.
fn load_auxiliary_files(path: &Path) -> BTreeMap<&'static str, String> {
    let mut loaded = BTreeMap::new();
    for extension in AUX_EXTENSIONS {
        let candidate = path.with_extension(extension);
        if let Ok(content) = decode::read_to_string(&candidate) {
            loaded.insert(extension, content);
        }
    }
    loaded
}

fn build_record(
    section: &IniSection,
    remote_address: &str,
    cms: Option<&IniDocument>,
) -> ConnectionRecord {
    let mut additional_settings = BTreeMap::new();
    if let Some(overlay) = cms.and_then(|doc| doc.section(&section.name)) {
        for (key, value) in &overlay.entries {
            additional_settings.insert(key.clone(), value.clone());
        }
    }

    let mut extra_fields = BTreeMap::new();
    for (key, value) in &section.entries {
        let known = KNOWN_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key));
        if !known {
            extra_fields.insert(key.clone(), value.clone());
        }
    }

    ConnectionRecord {
        name: section.name.clone(),
        type_code: section.get_or("Type", "").to_string(),
        remote_address: remote_address.to_string(),
        username: section.get_or("UserName", "").to_string(),
        password: section.get_or("Password", "").to_string(),
        shared_secret: section.get_or("PreSharedKey", "").to_string(),
        dns_primary: section.get_or("IpDnsAddress", "").to_string(),
        dns_secondary: section.get_or("IpDns2Address", "").to_string(),
        dns_suffix: section.get_or("IpDnsSuffix", "").to_string(),
        device: section.get_or("PreferredDevice", "").to_string(),
        use_extended_auth: section.get_or("UseExtendedAuthentication", "1").to_string(),
        auth_restrictions: section.get_or("AuthRestrictions", "").to_string(),
        data_encryption: section.get_or("DataEncryption", "").to_string(),
        encryption_type: section.get_or("EncryptionType", "").to_string(),
        extra_fields,
        additional_settings,
    }
}
