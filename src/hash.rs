//! Content hashing for cache keys and change detection.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `source` (64 characters).
pub fn content_hash(source: &str) -> String {
    let digest = Sha256::digest(source.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic_and_fixed_length() {
        let a = content_hash("def f():\n    pass\n");
        let b = content_hash("def f():\n    pass\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_near_duplicates_differ() {
        let base = "fn main() { println!(\"hi\"); }";
        let variants = [
            base.to_string(),
            format!("{} ", base),
            format!("{}\n", base),
            base.replace("hi", "Hi"),
            base.replace("main", "mian"),
            base.replacen(' ', "  ", 1),
        ];

        let digests: HashSet<_> = variants.iter().map(|v| content_hash(v)).collect();
        assert_eq!(digests.len(), variants.len());
    }
}
