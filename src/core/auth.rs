// src/core/auth.rs
//
// Per-request auth parameters for the catalog API:
//   ts     – time of call
//   apikey – public key
//   hash   – hex(md5(ts + private_key + public_key))
//
// md5 is what the remote expects; it is an integrity token, not a secret-
// strength MAC. Nothing here checks ts freshness.

use md5::{Digest, Md5};

use crate::config::Credentials;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthParams {
    pub ts: String,
    pub apikey: String,
    pub hash: String,
}

impl AuthParams {
    /// Pure form: sign an explicit timestamp.
    pub fn sign(ts: &str, creds: &Credentials) -> Self {
        let mut hasher = Md5::new();
        hasher.update(ts.as_bytes());
        hasher.update(creds.private_key().as_bytes());
        hasher.update(creds.public_key().as_bytes());
        let hash = hex::encode(hasher.finalize());

        Self {
            ts: s!(ts),
            apikey: s!(creds.public_key()),
            hash,
        }
    }

    /// Sign with the wall clock. Call right before each request.
    pub fn now(creds: &Credentials) -> Self {
        let ts = chrono::Utc::now().timestamp_millis().to_string();
        Self::sign(&ts, creds)
    }

    /// As query pairs, in the order the API documents them.
    pub fn into_query(self) -> Vec<(String, String)> {
        vec![
            (s!("ts"), self.ts),
            (s!("apikey"), self.apikey),
            (s!("hash"), self.hash),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_published_example() {
        // ts=1, private "abcd", public "1234" → md5("1abcd1234")
        let creds = Credentials::new("1234", "abcd");
        let auth = AuthParams::sign("1", &creds);
        assert_eq!(auth.hash, "ffd275c5130566a2916217b101f26150");
        assert_eq!(auth.apikey, "1234");
        assert_eq!(auth.ts, "1");
    }

    #[test]
    fn empty_inputs_hash_to_md5_of_nothing() {
        let creds = Credentials::new("", "");
        assert_eq!(AuthParams::sign("", &creds).hash, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn now_uses_numeric_timestamp_and_lowercase_hex() {
        let creds = Credentials::new("pub", "priv");
        let auth = AuthParams::now(&creds);
        assert!(auth.ts.parse::<i64>().is_ok());
        assert_eq!(auth.hash.len(), 32);
        assert!(auth.hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(auth, AuthParams::sign(&auth.ts, &creds));
    }
}
