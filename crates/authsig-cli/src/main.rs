use anyhow::{Context, bail};
use clap::Parser;
use serde_json::Value;

use rpc_authsig::{MemoryDirectory, PrivateKey, Request, sign_request, verify_authenticated_request};

/// Signs a JSON-RPC request, registers the signing key for the given
/// identity in an in-memory directory, and runs the full
/// authenticated-verification path against it.
#[derive(Parser)]
struct Args {
    /// Seed for the signing key; its SHA-256 hash becomes the private scalar.
    #[clap(long, env = "SIGNING_KEY_SEED", default_value = "demo-seed")]
    signing_key_seed: String,
    #[clap(long, default_value = "update_preferences")]
    method: String,
    /// Request parameters as a JSON object.
    #[clap(
        long,
        default_value = r#"{"test_pref":1,"details":{"username":"testuser","prefer_ssl":true}}"#
    )]
    params: String,
    /// Identity the request claims to act for.
    #[clap(long, default_value = "testuser")]
    identity: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "rpc_authsig=debug".to_string()),
        )
        .init();

    let args = Args::parse();

    let params: Value =
        serde_json::from_str(&args.params).context("parsing --params as JSON")?;
    if !params.is_object() {
        bail!("--params must be a JSON object");
    }

    let key = PrivateKey::from_seed(&args.signing_key_seed).context("deriving signing key")?;
    let mut request = Request::new(&args.method, params);

    let signed = sign_request(&mut request, &key).context("signing request")?;
    println!(
        "canonical request: {}",
        String::from_utf8_lossy(&signed.canonical_bytes)
    );
    println!("auth signature:    {}", signed.signature_hex);
    println!("auth key:          {}", signed.auth_key);

    let directory = MemoryDirectory::new();
    directory.grant(&args.identity, &signed.auth_key);

    let verified = verify_authenticated_request(&request, &args.identity, &directory)
        .await
        .context("verifying request")?;
    println!("verified for '{}': {verified}", args.identity);

    Ok(())
}
