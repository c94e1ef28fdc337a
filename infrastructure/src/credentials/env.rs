//! Environment-variable credential source

use duo_application::{CredentialError, CredentialSource};
use duo_domain::Credentials;
use std::collections::HashMap;
use tracing::debug;

/// Variables checked for the generator key, in order
pub const GENERATOR_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Variables checked for the evaluator key, in order
pub const EVALUATOR_KEY_VARS: &[&str] = &["TOGETHER_API_KEY"];

/// Reads both API keys from environment variables
///
/// Empty values count as unset.
pub struct EnvCredentialSource {
    vars: HashMap<String, String>,
}

impl EnvCredentialSource {
    /// Snapshot the key variables from the process environment
    ///
    /// Only the known names are read, so unrelated non-UTF-8 variables
    /// are never touched; a non-UTF-8 key counts as unset.
    pub fn from_env() -> Self {
        Self {
            vars: GENERATOR_KEY_VARS
                .iter()
                .chain(EVALUATOR_KEY_VARS)
                .filter_map(|name| Some((name.to_string(), std::env::var(name).ok()?)))
                .collect(),
        }
    }

    /// Use a fixed set of variables instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// First non-empty value among `names`
    pub fn lookup(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| {
            let value = self.vars.get(*name)?.trim();
            if value.is_empty() {
                None
            } else {
                debug!("Using API key from ${}", name);
                Some(value.to_string())
            }
        })
    }

    pub fn generator_key(&self) -> Option<String> {
        self.lookup(GENERATOR_KEY_VARS)
    }

    pub fn evaluator_key(&self) -> Option<String> {
        self.lookup(EVALUATOR_KEY_VARS)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn resolve(&self) -> Result<Credentials, CredentialError> {
        let generator = self.generator_key().ok_or_else(|| CredentialError::Missing {
            name: "generator".to_string(),
        })?;
        let evaluator = self.evaluator_key().ok_or_else(|| CredentialError::Missing {
            name: "evaluator".to_string(),
        })?;

        Ok(Credentials::new(generator, evaluator)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_vars() {
        let source = EnvCredentialSource::from_vars([
            ("GEMINI_API_KEY", "g-key"),
            ("TOGETHER_API_KEY", "e-key"),
        ]);
        let creds = source.resolve().unwrap();
        assert_eq!(creds.generator_key(), "g-key");
        assert_eq!(creds.evaluator_key(), "e-key");
    }

    #[test]
    fn test_google_key_is_a_fallback() {
        let source = EnvCredentialSource::from_vars([
            ("GEMINI_API_KEY", ""),
            ("GOOGLE_API_KEY", "google"),
        ]);
        assert_eq!(source.generator_key(), Some("google".to_string()));
    }

    #[test]
    fn test_from_env_survives_non_utf8_variables() {
        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;
            // SAFETY: the variable name is unique to this test
            unsafe {
                std::env::set_var("DUO_CHAT_TEST_NON_UTF8", OsStr::from_bytes(&[0xff, 0xfe]));
            }
        }

        let result = std::panic::catch_unwind(EnvCredentialSource::from_env);

        #[cfg(unix)]
        // SAFETY: see above
        unsafe {
            std::env::remove_var("DUO_CHAT_TEST_NON_UTF8");
        }
        let source = result.expect("from_env must not panic");
        assert!(source.vars.keys().all(|name| {
            GENERATOR_KEY_VARS.contains(&name.as_str()) || EVALUATOR_KEY_VARS.contains(&name.as_str())
        }));
    }

    #[test]
    fn test_missing_evaluator_key() {
        let source = EnvCredentialSource::from_vars([("GEMINI_API_KEY", "g")]);
        let err = source.resolve().unwrap_err();
        assert_eq!(err.to_string(), "No evaluator API key provided");
    }
}
