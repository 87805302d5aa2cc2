use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
const ID_HEX_LEN: usize = 16;

/// Stable short id: `prefix` followed by the first 16 hex chars of SHA-256 over the
/// `|`-joined identity fields.
pub(crate) fn short_id(prefix: &str, parts: &[&str]) -> String {
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{prefix}{}", &digest[..ID_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_prefixed() {
        let a = short_id("diff-", &["addition", "3", "dog"]);
        let b = short_id("diff-", &["addition", "3", "dog"]);
        assert_eq!(a, b);
        assert!(a.starts_with("diff-"));
        assert_eq!(a.len(), "diff-".len() + 16);
        assert!(a["diff-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn any_identity_field_changes_the_id() {
        let base = short_id("change-", &["insert", "0.0.1", "x"]);
        assert_ne!(base, short_id("change-", &["delete", "0.0.1", "x"]));
        assert_ne!(base, short_id("change-", &["insert", "0.0.2", "x"]));
        assert_ne!(base, short_id("change-", &["insert", "0.0.1", "y"]));
    }
}
