//! Authenticated JSON-RPC requests over secp256k1.
//!
//! A request's parameters are canonicalized (every mapping key-sorted,
//! recursively), hashed with SHA-256, and ECDSA-signed; the signature
//! and the signer's public key travel inside the parameter mapping as
//! the reserved `AuthSig`/`AuthKey` fields. Verification strips those
//! fields, recomputes the canonical digest, and checks the claimed key
//! against both the signature and the identity's authorized-key set in
//! an external account directory.

pub mod auth;
pub mod canonical;
pub mod directory;
pub mod error;
pub mod keys;
pub mod request;
pub mod signing;

pub use auth::{is_authorized, verify_authenticated_request};
pub use canonical::{canonical_bytes, canonicalize};
pub use directory::{KeyDirectory, MemoryDirectory, TimeoutDirectory};
pub use error::AuthError;
pub use keys::{PrivateKey, PublicKey};
pub use request::{AUTH_KEY_FIELD, AUTH_SIG_FIELD, Request};
pub use signing::{SignedRequest, sign_request, verify_request_bytes};
