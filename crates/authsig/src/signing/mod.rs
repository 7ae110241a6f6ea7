mod sign;
mod verify;

pub use sign::{SignedRequest, sign_request};
pub use verify::verify_request_bytes;
