use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pbk2mobileconfig")]
#[command(about = "Convert Windows VPN phonebooks (.pbk) to Apple configuration profiles")]
pub struct Cli {
    /// Input .pbk file path.
    pub input: PathBuf,
    /// Output .mobileconfig file path.
    pub output: PathBuf,
    /// Organization name embedded in the profile.
    #[arg(long, default_value = "Organization")]
    pub org: String,
    /// Profile identifier prefix (for example com.example.vpn).
    #[arg(long, default_value = "com.example.vpn")]
    pub identifier: String,
    /// Whether the profile may be removed from the device.
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    pub removable: bool,
}
