//! Request signing
//!
//! Cloudinary authenticates signed calls with a SHA-1 digest of the sorted
//! request parameters followed by the API secret. The secret itself is never
//! sent.

use sha1::{Digest, Sha1};

/// Current Unix time in seconds, formatted the way the API expects it.
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Signs `params` with `secret`.
///
/// Pairs are sorted by key and joined as `k=v` with `&`; the secret is
/// appended before hashing. Callers pass exactly the parameters they send.
pub fn sign(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Signature for an upload. `public_id` is only signed when a name is given,
/// matching the form fields sent.
pub fn upload_signature(name: &str, timestamp: &str, secret: &str) -> String {
    if name.is_empty() {
        sign(&[("timestamp", timestamp)], secret)
    } else {
        sign(&[("public_id", name), ("timestamp", timestamp)], secret)
    }
}

/// Signature for a destroy call. `public_id` is always signed, even when empty.
pub fn destroy_signature(name: &str, timestamp: &str, secret: &str) -> String {
    sign(&[("public_id", name), ("timestamp", timestamp)], secret)
}
