use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// Reserved parameter key carrying the hex-encoded signature.
pub const AUTH_SIG_FIELD: &str = "AuthSig";
/// Reserved parameter key carrying the signer's encoded public key.
pub const AUTH_KEY_FIELD: &str = "AuthKey";

/// A JSON-RPC style method call: a method name plus an optional
/// named-parameter mapping.
///
/// Mutable until signed — signing injects [`AUTH_SIG_FIELD`] and
/// [`AUTH_KEY_FIELD`] into `params`, after which the request is
/// treated as immutable for transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params: Some(params),
        }
    }

    /// A method-only request with no parameters.
    pub fn bare(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, AuthError> {
        serde_json::from_slice(bytes)
            .map_err(|e| AuthError::MalformedRequest(format!("unparseable wire bytes: {e}")))
    }

    pub fn to_value(&self) -> Result<Value, AuthError> {
        serde_json::to_value(self)
            .map_err(|e| AuthError::MalformedRequest(e.to_string()))
    }

    /// The parameter mapping, if `params` is present and is an object.
    pub fn params_object(&self) -> Option<&Map<String, Value>> {
        self.params.as_ref().and_then(Value::as_object)
    }

    /// Mutable access to the parameter mapping; errors when `params`
    /// is missing or not a mapping, since there is nowhere to put the
    /// auth fields.
    pub(crate) fn params_object_mut(&mut self) -> Result<&mut Map<String, Value>, AuthError> {
        match self.params.as_mut() {
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(AuthError::MalformedRequest(
                "params must be a mapping".into(),
            )),
            None => Err(AuthError::MalformedRequest("missing params".into())),
        }
    }

    /// Whether both auth fields are present as strings.
    pub fn has_auth_fields(&self) -> bool {
        self.auth_fields().is_some()
    }

    /// The `(AuthKey, AuthSig)` pair, when both are present as strings.
    pub fn auth_fields(&self) -> Option<(&str, &str)> {
        let params = self.params_object()?;
        let key = params.get(AUTH_KEY_FIELD)?.as_str()?;
        let sig = params.get(AUTH_SIG_FIELD)?.as_str()?;
        Some((key, sig))
    }
}
