/// Errors raised by the request-authentication core.
///
/// Only structural and encoding violations surface as errors. An
/// unauthorized request or a failed signature check is an expected
/// business outcome and is reported as `Ok(false)` by the verification
/// entry points, never as a variant here.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request is structurally unusable: missing `params`, `params`
    /// not a mapping, unparseable wire bytes, or absent auth fields
    /// where the contract requires them.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Key material failed checksum or format validation.
    #[error("invalid key encoding: {0}")]
    InvalidKey(String),

    /// Signature bytes do not decode as a compact ECDSA signature.
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// The external account directory could not be reached in time.
    /// Distinct from "unauthorized": the caller decides retry policy.
    #[error("account directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let error = AuthError::InvalidKey("checksum mismatch".into());
        assert_eq!(error.to_string(), "invalid key encoding: checksum mismatch");
    }

    #[test]
    fn directory_unavailable_is_not_malformed() {
        let error = AuthError::DirectoryUnavailable("timed out".into());
        assert!(matches!(error, AuthError::DirectoryUnavailable(_)));
    }
}
