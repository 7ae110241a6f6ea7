use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::canonical_bytes;
use crate::error::AuthError;
use crate::keys::PrivateKey;
use crate::request::{AUTH_KEY_FIELD, AUTH_SIG_FIELD, Request};

/// The output of signing: the final wire bytes plus the two values
/// that were injected into the request's parameter mapping.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Canonical serialization of the request *including* the injected
    /// auth fields — exactly what goes on the wire.
    pub canonical_bytes: Vec<u8>,
    /// Hex-encoded compact ECDSA signature over the digest of the
    /// canonical bytes *before* the auth fields were injected.
    pub signature_hex: String,
    /// WIF-encoded public key of the signer, as written to `AuthKey`.
    pub auth_key: String,
}

/// Signs a request in place.
///
/// Canonicalizes the request, hashes the canonical bytes with SHA-256,
/// signs the digest, then writes `AuthSig` (hex signature) and
/// `AuthKey` (the signer's *public* key in WIF form) into `params` and
/// re-canonicalizes to produce the wire bytes. A verifier reproduces
/// the signed digest by stripping those two fields and re-hashing.
///
/// Requires `params` to be present and a mapping; anything else is a
/// [`AuthError::MalformedRequest`].
pub fn sign_request(request: &mut Request, key: &PrivateKey) -> Result<SignedRequest, AuthError> {
    // Fail before touching the request if there is nowhere to put the
    // auth fields.
    request.params_object_mut()?;

    let unsigned = canonical_bytes(&request.to_value()?)?;
    let digest = Sha256::digest(&unsigned);
    let signature_hex = hex::encode(key.sign_digest(&digest)?);
    let auth_key = key.public_key().to_wif();

    let params = request.params_object_mut()?;
    params.insert(AUTH_SIG_FIELD.into(), Value::String(signature_hex.clone()));
    params.insert(AUTH_KEY_FIELD.into(), Value::String(auth_key.clone()));

    let canonical = canonical_bytes(&request.to_value()?)?;
    debug!(method = %request.method, "signed request");

    Ok(SignedRequest {
        canonical_bytes: canonical,
        signature_hex,
        auth_key,
    })
}
