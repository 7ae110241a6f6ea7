use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::canonical_bytes;
use crate::error::AuthError;
use crate::keys::PublicKey;
use crate::request::{AUTH_KEY_FIELD, AUTH_SIG_FIELD};

/// Verifies a signed request received off the wire.
///
/// The wire bytes are re-parsed and re-canonicalized locally — key
/// order as it arrived carries no weight. `AuthSig` and `AuthKey` are
/// stripped from the parameter mapping, the remainder is canonicalized
/// and hashed, and the signature is checked against that digest.
///
/// Cryptographic mismatch is `Ok(false)`. Structural problems
/// (unparseable bytes, missing `params` mapping, absent auth fields)
/// are [`AuthError::MalformedRequest`]; a signature that does not
/// decode as hex or as a compact ECDSA signature is
/// [`AuthError::InvalidSignatureEncoding`].
pub fn verify_request_bytes(
    wire: &[u8],
    public_key: &PublicKey,
    signature_hex: &str,
) -> Result<bool, AuthError> {
    let mut value: Value = serde_json::from_slice(wire)
        .map_err(|e| AuthError::MalformedRequest(format!("unparseable wire bytes: {e}")))?;

    let params = value
        .get_mut("params")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| AuthError::MalformedRequest("missing params mapping".into()))?;

    let had_sig = params.remove(AUTH_SIG_FIELD).is_some();
    let had_key = params.remove(AUTH_KEY_FIELD).is_some();
    if !had_sig || !had_key {
        return Err(AuthError::MalformedRequest(
            "missing AuthSig/AuthKey fields".into(),
        ));
    }

    let stripped = canonical_bytes(&value)?;
    let digest = Sha256::digest(&stripped);
    let signature = hex::decode(signature_hex)
        .map_err(|e| AuthError::InvalidSignatureEncoding(e.to_string()))?;

    let verified = public_key.verify_digest(&digest, &signature)?;
    if !verified {
        debug!("signature did not verify against canonical digest");
    }
    Ok(verified)
}
