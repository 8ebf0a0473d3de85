use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseHeaderArgs {
    /// The `Keygen-Signature` header to parse
    pub header: String,
}

#[derive(Args)]
pub struct EncodeKeyArgs {
    /// Hex-encoded Ed25519 public key, as shown in the licensing service's dashboard
    pub hex: String,
}

#[derive(Args)]
pub struct CanonicalStringArgs {
    /// HTTP method of the webhook request
    #[arg(default_value = "POST", long, short)]
    pub method: String,

    /// Path (and query) the webhook is delivered to
    #[arg(default_value = "/keygen", long, short)]
    pub path: String,

    /// Value of the `Host` header
    #[arg(long)]
    pub host: String,

    /// Value of the `Date` header
    #[arg(long, short)]
    pub date: String,

    /// File containing the exact request body
    #[arg(long, short)]
    pub body_file: PathBuf,
}

#[derive(Subcommand)]
pub enum ToolSubcommand {
    /// Parse the signature header and report any format errors
    ParseHeader(ParseHeaderArgs),

    /// Wrap a raw Ed25519 public key into its DER/PEM `SubjectPublicKeyInfo`
    EncodeKey(EncodeKeyArgs),

    /// Print the digest header and the signing string of a webhook request
    CanonicalString(CanonicalStringArgs),
}

#[derive(Parser)]
#[command(about, version)]
pub struct ToolArgs {
    #[clap(subcommand)]
    pub subcommand: ToolSubcommand,
}
