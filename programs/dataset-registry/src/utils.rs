use solana_sha256_hasher::hash;

/// Hash raw dataset bytes into the 32-byte content digest used in Dataset
/// PDA seeds. Clients derive dataset addresses from this same digest, so
/// the program and its callers agree on what "identical content" means.
pub fn hash_content(bytes: &[u8]) -> [u8; 32] {
    hash(bytes).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_is_deterministic() {
        assert_eq!(hash_content(b"survey-2024.csv"), hash_content(b"survey-2024.csv"));
        assert_ne!(hash_content(b"survey-2024.csv"), hash_content(b"survey-2025.csv"));
    }
}
