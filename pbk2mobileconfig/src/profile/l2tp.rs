//! L2TP payload blocks: the VPN tunnel, IPSec, and PPP link settings.

use pbk_core::ConnectionRecord;
use plist::{Dictionary, Value};

use super::{integer, string, string_array};

/// Acceptable PPP authentication protocols, in negotiation order.
const PPP_AUTH_PROTOCOLS: [&str; 3] = ["PAP", "CHAP", "MSCHAPv2"];

/// Add the three L2TP sub-structures to a payload.
///
/// Credential fields (`AuthName`, `AuthPassword`, `SharedSecret`, XAuth) are
/// always emitted blank; secrets are completed out of band on the device.
pub(super) fn apply(payload: &mut Dictionary, record: &ConnectionRecord) {
    payload.insert("VPN".to_string(), Value::Dictionary(vpn_block(record)));
    payload.insert("IPSec".to_string(), Value::Dictionary(ipsec_block(record)));
    payload.insert("PPP".to_string(), Value::Dictionary(ppp_block(record)));
}

fn vpn_block(record: &ConnectionRecord) -> Dictionary {
    // An unparsable flag falls back to extended auth enabled.
    let extended_auth = record.use_extended_auth.trim().parse::<i64>().unwrap_or(1);

    let mut vpn = Dictionary::new();
    vpn.insert("RemoteAddress".to_string(), string(record.remote_address.as_str()));
    vpn.insert("AuthenticationMethod".to_string(), string("Password"));
    vpn.insert("CommRemoteAddress".to_string(), string(record.remote_address.as_str()));
    vpn.insert("AuthName".to_string(), string(""));
    vpn.insert("AuthPassword".to_string(), string(""));
    vpn.insert("SharedSecret".to_string(), string(""));
    vpn.insert("TokenCard".to_string(), Value::Boolean(false));
    vpn.insert("DisconnectOnIdle".to_string(), integer(0));
    vpn.insert("EnableSplitTunneling".to_string(), integer(1));
    vpn.insert("ProtocolType".to_string(), string("L2TP"));
    vpn.insert("AuthEAPPlugins".to_string(), Value::Array(Vec::new()));
    vpn.insert("AuthProtocol".to_string(), string_array(["Password"]));
    vpn.insert("UseExtendedAuthentication".to_string(), integer(extended_auth));
    vpn.insert("InterfaceTypeMatch".to_string(), string("Ethernet"));
    vpn.insert("EncryptionLevel".to_string(), string("Auto"));
    vpn
}

fn ipsec_block(record: &ConnectionRecord) -> Dictionary {
    let mut ipsec = Dictionary::new();
    ipsec.insert("AuthenticationMethod".to_string(), string("SharedSecret"));
    ipsec.insert("SharedSecret".to_string(), string(""));
    ipsec.insert("LocalIdentifierType".to_string(), string("KeyID"));
    ipsec.insert("RemoteAddress".to_string(), string(record.remote_address.as_str()));
    ipsec.insert("XAuthEnabled".to_string(), integer(1));
    ipsec.insert("XAuthName".to_string(), string(""));
    ipsec.insert("XAuthPassword".to_string(), string(""));
    ipsec.insert("PromptForVPNPIN".to_string(), Value::Boolean(false));
    ipsec
}

fn ppp_block(record: &ConnectionRecord) -> Dictionary {
    let mut ppp = Dictionary::new();
    ppp.insert("CommRemoteAddress".to_string(), string(record.remote_address.as_str()));
    ppp.insert("AuthName".to_string(), string(""));
    ppp.insert("AuthPassword".to_string(), string(""));
    ppp.insert("TokenCard".to_string(), Value::Boolean(false));
    ppp.insert("CCPEnabled".to_string(), integer(0));
    ppp.insert("CCPMPPE40Enabled".to_string(), integer(0));
    ppp.insert("CCPMPPE128Enabled".to_string(), integer(0));
    ppp.insert("AuthProtocol".to_string(), string_array(PPP_AUTH_PROTOCOLS));
    ppp.insert("DialMode".to_string(), string("Manual"));
    ppp.insert("IdleDisconnectEnabled".to_string(), integer(0));
    // Keep-alive timing: echo on, 5 allowed failures, 30-second interval.
    ppp.insert("LCPEchoEnabled".to_string(), integer(1));
    ppp.insert("LCPEchoFailure".to_string(), integer(5));
    ppp.insert("LCPEchoInterval".to_string(), integer(30));
    ppp
}
