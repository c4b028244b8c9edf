//! Salted one-way SHA256 tokens.

use sha2::{Digest, Sha256};

const TOKEN_PREFIX: &str = "anon_";
const TOKEN_HEX_LEN: usize = 12;

/// `anon_` followed by the first 12 hex chars of SHA256(value + salt).
///
/// Equal values map to equal tokens under the same salt, so anonymized
/// datasets still join on the replaced column.
pub fn anonymize_value(value: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}{}", TOKEN_PREFIX, &digest[..TOKEN_HEX_LEN])
}
