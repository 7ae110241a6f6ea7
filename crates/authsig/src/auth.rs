use tracing::debug;

use crate::canonical::canonical_bytes;
use crate::directory::KeyDirectory;
use crate::error::AuthError;
use crate::keys::PublicKey;
use crate::request::Request;
use crate::signing::verify_request_bytes;

/// Whether `claimed_key` is in the directory's current authorized set
/// for `identity`. Re-queries the directory on every call.
pub async fn is_authorized(
    identity: &str,
    claimed_key: &str,
    directory: &dyn KeyDirectory,
) -> Result<bool, AuthError> {
    let keys = directory.authorized_keys(identity).await?;
    Ok(keys.contains(claimed_key))
}

/// Full authenticated-request check: field presence, then directory
/// membership, then cryptographic verification — in that order.
///
/// Membership is checked before the signature so a request from an
/// unauthorized key is rejected without running the curve math; an
/// authorized key identifier alone is never sufficient, the signature
/// must still verify against it.
///
/// A request missing `AuthKey` or `AuthSig` is `Ok(false)`, not an
/// error — absent credentials are an expected outcome. The caller
/// cannot tell a membership rejection from a signature rejection by
/// the return value; diagnostics go to tracing only.
pub async fn verify_authenticated_request(
    request: &Request,
    identity: &str,
    directory: &dyn KeyDirectory,
) -> Result<bool, AuthError> {
    let Some((auth_key, auth_sig)) = request.auth_fields() else {
        debug!(identity, "request carries no auth fields");
        return Ok(false);
    };

    if !is_authorized(identity, auth_key, directory).await? {
        debug!(identity, "claimed key is not in the authorized set");
        return Ok(false);
    }

    let public_key = PublicKey::from_wif(auth_key)?;
    let wire = canonical_bytes(&request.to_value()?)?;
    verify_request_bytes(&wire, &public_key, auth_sig)
}
