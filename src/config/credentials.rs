// src/config/credentials.rs
//
// API keys for the catalog. Loaded once at startup and handed to the client
// by value; nothing else reads the environment.
//
// Lookup order per key:
//   1. process environment (after `.env` is merged in by dotenvy)
//   2. `marvel_keys.cfg` in the working directory (`public_key=` / `private_key=`)

use std::{env, fmt, fs, path::Path};

use super::consts::{ENV_PRIVATE_KEY, ENV_PUBLIC_KEY, KEYS_FILE};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

// Keep the private key out of `{:?}` output (and therefore out of logs).
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &crate::log::redact(&self.public_key))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    Missing(&'static str),
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::Missing(var) => write!(
                f,
                "{var} is not set (environment, .env, or {KEYS_FILE})"
            ),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Values found in a `marvel_keys.cfg` file. Either may be absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeysFile {
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self { public_key: public_key.into(), private_key: private_key.into() }
    }

    pub fn public_key(&self) -> &str { &self.public_key }
    pub fn private_key(&self) -> &str { &self.private_key }

    /// Startup path: `.env` → environment → keys file.
    pub fn load() -> Result<Self, CredentialsError> {
        match dotenvy::dotenv() {
            Ok(path) => logd!("Config: Loaded {}", path.display()),
            Err(e) => logd!("Config: No .env ({})", e),
        }
        Self::from_sources(
            env::var(ENV_PUBLIC_KEY).ok(),
            env::var(ENV_PRIVATE_KEY).ok(),
            Path::new(KEYS_FILE),
        )
    }

    /// Resolve keys from explicit values, falling back to `keys_file` for any
    /// that are missing or blank. The file is only read when needed.
    pub fn from_sources(
        public: Option<String>,
        private: Option<String>,
        keys_file: &Path,
    ) -> Result<Self, CredentialsError> {
        let public = non_blank(public);
        let private = non_blank(private);

        let file = if public.is_none() || private.is_none() {
            load_keys_file(keys_file)
        } else {
            KeysFile::default()
        };

        let public_key = public
            .or(non_blank(file.public_key))
            .ok_or(CredentialsError::Missing(ENV_PUBLIC_KEY))?;
        let private_key = private
            .or(non_blank(file.private_key))
            .ok_or(CredentialsError::Missing(ENV_PRIVATE_KEY))?;

        logf!("Config: Credentials ready (public key {})", crate::log::redact(&public_key));
        Ok(Self { public_key, private_key })
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Missing or unreadable file → empty result.
pub fn load_keys_file(path: &Path) -> KeysFile {
    match fs::read_to_string(path) {
        Ok(text) => parse_keys_file(&text),
        Err(_) => KeysFile::default(),
    }
}

pub fn parse_keys_file(text: &str) -> KeysFile {
    let mut keys = KeysFile::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim().trim_matches('"');
            match key {
                "public_key" => keys.public_key = Some(s!(val)),
                "private_key" => keys.private_key = Some(s!(val)),
                _ => {}
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_file_with_comments_and_quotes() {
        let text = "# marvel\npublic_key = abc\n\nprivate_key=\"xyz\"\nother=1\n";
        let keys = parse_keys_file(text);
        assert_eq!(keys.public_key.as_deref(), Some("abc"));
        assert_eq!(keys.private_key.as_deref(), Some("xyz"));
    }

    #[test]
    fn explicit_values_win_and_skip_file() {
        let creds = Credentials::from_sources(
            Some(s!("pub")),
            Some(s!("priv")),
            Path::new("definitely/not/here.cfg"),
        )
        .unwrap();
        assert_eq!(creds.public_key(), "pub");
        assert_eq!(creds.private_key(), "priv");
    }

    #[test]
    fn blank_or_missing_key_is_an_error() {
        let err = Credentials::from_sources(
            Some(s!("  ")),
            Some(s!("priv")),
            Path::new("definitely/not/here.cfg"),
        )
        .unwrap_err();
        assert_eq!(err, CredentialsError::Missing(ENV_PUBLIC_KEY));

        let err = Credentials::from_sources(Some(s!("pub")), None, Path::new("nope.cfg")).unwrap_err();
        assert_eq!(err, CredentialsError::Missing(ENV_PRIVATE_KEY));
    }

    #[test]
    fn debug_output_hides_private_key() {
        let creds = Credentials::new("publickey123", "supersecret");
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("supersecret"));
        assert!(!dbg.contains("publickey123"));
    }
}
