//! Cloudinary request signing.

use std::collections::BTreeMap;

use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::infrastructure::config::SignatureAlgorithm;

/// Parameters that are sent but never signed.
const UNSIGNED_PARAMS: [&str; 5] = ["file", "api_key", "resource_type", "cloud_name", "signature"];

/// Builds the `key=value&...` string Cloudinary signs.
///
/// Keys are sorted, empty values and unsigned parameters are left out.
#[must_use]
pub fn string_to_sign(params: &BTreeMap<&str, String>) -> String {
    params
        .iter()
        .filter(|(key, value)| !value.is_empty() && !UNSIGNED_PARAMS.contains(*key))
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs upload parameters with the API secret, hex encoded.
#[must_use]
pub fn sign(
    params: &BTreeMap<&str, String>,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let payload = format!("{}{api_secret}", string_to_sign(params));
    match algorithm {
        SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(payload.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn test_string_to_sign_sorted_and_filtered() {
        let params = params(&[
            ("timestamp", "1315060510"),
            ("folder", "cravecart/foods"),
            ("file", "https://x.test/a.png"),
            ("api_key", "1234"),
            ("public_id", ""),
        ]);

        assert_eq!(
            string_to_sign(&params),
            "folder=cravecart/foods&timestamp=1315060510"
        );
    }

    #[test]
    fn test_sha1_digest_of_secret_when_no_params() {
        assert_eq!(
            sign(&BTreeMap::new(), "abc", SignatureAlgorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_sha256_digest_of_secret_when_no_params() {
        assert_eq!(
            sign(&BTreeMap::new(), "abc", SignatureAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha1_signs_joined_params_then_secret() {
        let signed = params(&[("folder", "f"), ("timestamp", "1")]);
        let unsigned_equivalent = BTreeMap::new();

        assert_eq!(
            sign(&signed, "s", SignatureAlgorithm::Sha1),
            sign(&unsigned_equivalent, "folder=f&timestamp=1s", SignatureAlgorithm::Sha1)
        );
    }

    #[test]
    fn test_signature_depends_on_secret_params_and_algorithm() {
        let base = params(&[("folder", "cravecart"), ("timestamp", "1700000000")]);
        let moved = params(&[("folder", "cravecart/foods"), ("timestamp", "1700000000")]);
        let sha1 = SignatureAlgorithm::Sha1;

        assert_eq!(sign(&base, "s1", sha1), sign(&base, "s1", sha1));
        assert_ne!(sign(&base, "s1", sha1), sign(&base, "s2", sha1));
        assert_ne!(sign(&base, "s1", sha1), sign(&moved, "s1", sha1));
        assert_eq!(sign(&base, "s1", sha1).len(), 40);
        assert_eq!(sign(&base, "s1", SignatureAlgorithm::Sha256).len(), 64);
    }
}
