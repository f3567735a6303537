//! Translation of phonebook connection records into Apple VPN payloads.
//!
//! Every record translates; there are no failure modes here. Sparse records
//! produce payloads with blank or default values, and unknown dial-protocol
//! codes fall back to the L2TP family rather than aborting a conversion.
//!
//! Family-specific payload blocks live one module per family:
//!
//! - [`l2tp`] — VPN tunnel, IPSec, and PPP link blocks (fully emitted)
//! - [`pptp`] — invariant fields only, pending a confirmed key set
//! - [`ikev2`] — invariant fields only, pending a confirmed key set

mod ikev2;
mod l2tp;
mod pptp;

use pbk_core::ConnectionRecord;
use plist::{Dictionary, Value};
use uuid::Uuid;

/// Apple VPN protocol family resolved from a phonebook dial-protocol code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnFamily {
    Pptp,
    L2tp,
    Ikev2,
}

impl VpnFamily {
    /// Total mapping from the Windows dial-protocol code. Unknown codes fall
    /// back to L2TP so an unrecognized entry still converts; this is policy,
    /// not an error path.
    pub fn from_type_code(code: &str) -> Self {
        match code.trim() {
            "1" | "2" => VpnFamily::Pptp,
            "4" | "8" => VpnFamily::L2tp,
            "10" => VpnFamily::Ikev2,
            _ => VpnFamily::L2tp,
        }
    }

    /// Schema tag carried in the payload's `VPNType` key.
    pub fn as_str(self) -> &'static str {
        match self {
            VpnFamily::Pptp => "PPTP",
            VpnFamily::L2tp => "L2TP",
            VpnFamily::Ikev2 => "IKEv2",
        }
    }
}

/// Profile-wide settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    organization: String,
    identifier: String,
    removable: bool,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new("Organization", "com.example.vpn", true)
    }
}

impl ProfileBuilder {
    pub fn new(
        organization: impl Into<String>,
        identifier: impl Into<String>,
        removable: bool,
    ) -> Self {
        Self {
            organization: organization.into(),
            identifier: identifier.into(),
            removable,
        }
    }

    /// Assemble the root profile document from translated records.
    ///
    /// Payloads keep input order. The root `PayloadUUID` is generated
    /// independently of every per-payload UUID. An empty record slice is
    /// valid and yields an empty `PayloadContent`.
    pub fn build_profile(&self, records: &[ConnectionRecord]) -> Dictionary {
        let payloads = records
            .iter()
            .map(|record| Value::Dictionary(self.build_payload(record)))
            .collect();

        let mut root = Dictionary::new();
        root.insert("PayloadContent".to_string(), Value::Array(payloads));
        root.insert("PayloadDisplayName".to_string(), string("VPN Configuration"));
        root.insert("PayloadIdentifier".to_string(), string(self.identifier.as_str()));
        root.insert(
            "PayloadRemovalDisallowed".to_string(),
            Value::Boolean(!self.removable),
        );
        root.insert("PayloadType".to_string(), string("Configuration"));
        root.insert("PayloadUUID".to_string(), string(Uuid::new_v4().to_string()));
        root.insert("PayloadVersion".to_string(), integer(1));
        root.insert(
            "PayloadDescription".to_string(),
            string("VPN Configuration Profile"),
        );
        root.insert(
            "PayloadOrganization".to_string(),
            string(self.organization.as_str()),
        );
        root
    }

    /// Translate one record into a managed-VPN payload dictionary.
    pub fn build_payload(&self, record: &ConnectionRecord) -> Dictionary {
        let family = VpnFamily::from_type_code(&record.type_code);
        let payload_uuid = Uuid::new_v4().to_string();

        let mut payload = Dictionary::new();
        payload.insert("PayloadType".to_string(), string("com.apple.vpn.managed"));
        payload.insert("PayloadVersion".to_string(), integer(1));
        payload.insert(
            "PayloadIdentifier".to_string(),
            string(format!("{}.{}.{}", self.identifier, record.name, payload_uuid)),
        );
        payload.insert("PayloadUUID".to_string(), string(payload_uuid));
        payload.insert("PayloadDisplayName".to_string(), string(record.name.as_str()));
        payload.insert(
            "PayloadDescription".to_string(),
            string("Configures VPN settings"),
        );
        payload.insert(
            "PayloadOrganization".to_string(),
            string(self.organization.as_str()),
        );
        payload.insert("VPNType".to_string(), string(family.as_str()));
        payload.insert("PayloadEnabled".to_string(), Value::Boolean(true));

        match family {
            VpnFamily::L2tp => l2tp::apply(&mut payload, record),
            VpnFamily::Pptp => pptp::apply(&mut payload, record),
            VpnFamily::Ikev2 => ikev2::apply(&mut payload, record),
        }

        apply_common_settings(&mut payload, record);
        payload
    }
}

/// Keys shared by every family: the DNS block (only when the record carries
/// DNS data), a manual IPv4 block, and the top-level split tunneling flag.
///
/// The top-level boolean is independent of the integer split-tunneling flag
/// inside the L2TP VPN block; the target schema expects both keys.
fn apply_common_settings(payload: &mut Dictionary, record: &ConnectionRecord) {
    let mut dns = Dictionary::new();

    let servers: Vec<&str> = [&record.dns_primary, &record.dns_secondary]
        .into_iter()
        .filter(|address| !address.is_empty())
        .map(String::as_str)
        .collect();
    if !servers.is_empty() {
        dns.insert("ServerAddresses".to_string(), string_array(servers));
        dns.insert("SupplementalMatchDomains".to_string(), Value::Array(Vec::new()));
    }
    if !record.dns_suffix.is_empty() {
        let suffix = record.dns_suffix.as_str();
        dns.insert("SearchDomains".to_string(), string_array([suffix]));
        dns.insert("SupplementalMatchDomains".to_string(), string_array([suffix]));
    }
    if !dns.is_empty() {
        payload.insert("DNS".to_string(), Value::Dictionary(dns));
    }

    let mut ipv4 = Dictionary::new();
    ipv4.insert("OverridePrimary".to_string(), integer(1));
    ipv4.insert("ConfigMethod".to_string(), string("Manual"));
    payload.insert("IPv4".to_string(), Value::Dictionary(ipv4));

    payload.insert("EnableSplitTunneling".to_string(), Value::Boolean(true));
}

pub(crate) fn string(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

pub(crate) fn integer(value: i64) -> Value {
    Value::Integer(value.into())
}

pub(crate) fn string_array<I, S>(values: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(
        values
            .into_iter()
            .map(|value| Value::String(value.into()))
            .collect(),
    )
}
