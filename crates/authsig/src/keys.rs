use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand_core::OsRng;
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Raw length of a secp256k1 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;
/// Raw length of a compressed SEC1 public point.
pub const PUBLIC_KEY_LEN: usize = 33;

/// A secp256k1 signing key.
///
/// Encoded for transport as checksummed Base58 ("WIF-style") over the
/// raw 32-byte scalar. Decoding validates the 4-byte double-SHA-256
/// checksum and rejects anything that is not exactly 32 bytes.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generates a fresh key from OS randomness.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Derives a key from a seed string — the SHA-256 hash of the seed
    /// becomes the 32-byte private scalar.
    pub fn from_seed(seed: &str) -> Result<Self, AuthError> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| AuthError::InvalidKey(format!("invalid seed: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Decodes a WIF-style private key, rejecting checksum mismatches.
    pub fn from_wif(encoded: &str) -> Result<Self, AuthError> {
        let bytes = decode_checked(encoded, PRIVATE_KEY_LEN)?;
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    pub fn to_wif(&self) -> String {
        bs58::encode(self.signing_key.to_bytes())
            .with_check()
            .into_string()
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: *self.signing_key.verifying_key(),
        }
    }

    /// Signs a precomputed digest, returning the 64-byte compact
    /// signature. Deterministic per RFC 6979 — the same key and digest
    /// always produce the same bytes.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, AuthError> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| AuthError::InvalidKey(format!("secp256k1 sign_prehash failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// A secp256k1 verifying key, transported as checksummed Base58 over
/// the 33-byte compressed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Decodes a WIF-style public key, rejecting checksum mismatches
    /// and points that are not on the curve.
    pub fn from_wif(encoded: &str) -> Result<Self, AuthError> {
        let bytes = decode_checked(encoded, PUBLIC_KEY_LEN)?;
        let verifying_key = VerifyingKey::from_sec1_bytes(&bytes)
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self { verifying_key })
    }

    pub fn to_wif(&self) -> String {
        bs58::encode(self.verifying_key.to_encoded_point(true).as_bytes())
            .with_check()
            .into_string()
    }

    /// Checks a compact signature against a precomputed digest.
    ///
    /// A signature that does not decode is an
    /// [`AuthError::InvalidSignatureEncoding`] error; a signature that
    /// decodes but does not match is an ordinary `Ok(false)`.
    pub fn verify_digest(&self, digest: &[u8], signature: &[u8]) -> Result<bool, AuthError> {
        let signature = Signature::from_slice(signature)
            .map_err(|e| AuthError::InvalidSignatureEncoding(e.to_string()))?;
        Ok(self.verifying_key.verify_prehash(digest, &signature).is_ok())
    }
}

fn decode_checked(encoded: &str, expected_len: usize) -> Result<Vec<u8>, AuthError> {
    let bytes = bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
    if bytes.len() != expected_len {
        return Err(AuthError::InvalidKey(format!(
            "expected {expected_len} key bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}
