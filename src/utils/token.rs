use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Opaque session token: 256 random bits, base64, nothing encoded inside.
/// Uniqueness is probabilistic, the store does not enforce it.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_prefixed_and_distinct() {
        let a = new_token();
        let b = new_token();
        assert!(a.starts_with("tok_"));
        assert!(b.starts_with("tok_"));
        assert_ne!(a, b);
        // 32 bytes -> 43 base64 chars, plus the prefix
        assert_eq!(a.len(), 4 + 43);
    }
}
