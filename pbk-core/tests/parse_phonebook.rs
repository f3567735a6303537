use std::fs;
use std::path::{Path, PathBuf};

use pbk_core::{parse_file, ParseError};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn one_record_per_typed_section_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Work VPN]\nType=4\n[Home VPN]\nType=1\n[Lab VPN]\nType=10\n",
    );

    let records = parse_file(&path).expect("parse");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Work VPN", "Home VPN", "Lab VPN"]);
    assert_eq!(records[0].type_code, "4");
    assert_eq!(records[2].type_code, "10");
}

#[test]
fn sections_without_type_are_excluded() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Device Settings]\nBaudRate=115200\n[Work VPN]\nType=4\n[Media]\nKind=modem\n",
    );

    let records = parse_file(&path).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Work VPN");
}

#[test]
fn file_with_no_typed_sections_yields_empty_vec() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "office.pbk", "[Media]\nKind=modem\n");

    assert_eq!(parse_file(&path).expect("parse"), vec![]);
}

#[test]
fn empty_file_yields_empty_vec() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "office.pbk", "");

    assert_eq!(parse_file(&path).expect("parse"), vec![]);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().expect("tempdir");
    let err = parse_file(&dir.path().join("absent.pbk")).expect_err("must fail");
    assert!(matches!(err, ParseError::NotFound(_)));
}

#[test]
fn headerless_leading_content_still_parses() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "AutoLogon=1\nPhoneNumber=vpn.example.com\n[Work VPN]\nType=4\n",
    );

    let records = parse_file(&path).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].remote_address, "vpn.example.com");
}

#[test]
fn last_phone_number_occurrence_applies_to_every_record() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Work VPN]\nType=4\nPhoneNumber=first.example.com\n\
         [Home VPN]\nType=8\nPhoneNumber=last.example.com\n",
    );

    let records = parse_file(&path).expect("parse");
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.remote_address, "last.example.com");
    }
}

#[test]
fn named_fields_default_when_absent() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "office.pbk", "[Work VPN]\nType=4\n");

    let record = &parse_file(&path).expect("parse")[0];
    assert_eq!(record.username, "");
    assert_eq!(record.password, "");
    assert_eq!(record.shared_secret, "");
    assert_eq!(record.dns_primary, "");
    assert_eq!(record.use_extended_auth, "1");
    assert_eq!(record.auth_restrictions, "");
}

#[test]
fn named_fields_are_captured() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Work VPN]\nType=4\nUserName=alice\nPreSharedKey=psk\nIpDnsAddress=8.8.8.8\n\
         IpDns2Address=8.8.4.4\nIpDnsSuffix=example.com\nPreferredDevice=WAN Miniport (L2TP)\n\
         UseExtendedAuthentication=0\nDataEncryption=8\nEncryptionType=2\n",
    );

    let record = &parse_file(&path).expect("parse")[0];
    assert_eq!(record.username, "alice");
    assert_eq!(record.shared_secret, "psk");
    assert_eq!(record.dns_primary, "8.8.8.8");
    assert_eq!(record.dns_secondary, "8.8.4.4");
    assert_eq!(record.dns_suffix, "example.com");
    assert_eq!(record.device, "WAN Miniport (L2TP)");
    assert_eq!(record.use_extended_auth, "0");
    assert_eq!(record.data_encryption, "8");
    assert_eq!(record.encryption_type, "2");
}

#[test]
fn unknown_keys_land_in_extra_fields_without_duplicating_known_ones() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Work VPN]\nType=4\nusername=alice\nExcludedProtocols=0\nIpPrioritizeRemote=1\n",
    );

    let record = &parse_file(&path).expect("parse")[0];
    // Known keys stay out of the extras map even with different casing.
    assert!(!record.extra_fields.contains_key("username"));
    assert_eq!(record.extra_fields.get("ExcludedProtocols").map(String::as_str), Some("0"));
    assert_eq!(record.extra_fields.get("IpPrioritizeRemote").map(String::as_str), Some("1"));
}

#[test]
fn malformed_lines_are_tolerated() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "office.pbk",
        "[Work VPN]\nType=4\nthis line has no equals sign\n; comment\nUserName=alice\n",
    );

    let record = &parse_file(&path).expect("parse")[0];
    assert_eq!(record.username, "alice");
}

#[test]
fn cms_companion_overlays_matching_section() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "office.pbk", "[Work VPN]\nType=4\n");
    write_file(
        dir.path(),
        "office.cms",
        "[Work VPN]\nServiceName=Corp Dialup\n[Other]\nIgnored=1\n",
    );

    let record = &parse_file(&path).expect("parse")[0];
    assert_eq!(
        record.additional_settings.get("ServiceName").map(String::as_str),
        Some("Corp Dialup")
    );
    assert!(!record.additional_settings.contains_key("Ignored"));
}

#[test]
fn cms_without_matching_section_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "office.pbk", "[Work VPN]\nType=4\n");
    write_file(dir.path(), "office.cms", "[Unrelated]\nKey=1\n");

    let record = &parse_file(&path).expect("parse")[0];
    assert!(record.additional_settings.is_empty());
}

#[test]
fn utf16le_phonebook_decodes() {
    let dir = tempdir().expect("tempdir");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "[Work VPN]\r\nType=4\r\nUserName=alice\r\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = dir.path().join("office.pbk");
    fs::write(&path, bytes).expect("write fixture");

    let records = parse_file(&path).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "alice");
}
