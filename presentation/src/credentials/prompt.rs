//! Masked terminal prompts for missing API keys

use colored::Colorize;
use duo_application::{CredentialError, CredentialSource};
use duo_domain::Credentials;
use std::io;

/// Reads a secret from the user without echoing it
pub trait SecretPrompt {
    fn ask(&self, label: &str) -> io::Result<String>;
}

/// [`SecretPrompt`] backed by the controlling terminal
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn ask(&self, label: &str) -> io::Result<String> {
        rpassword::prompt_password(format!("{} ", label.bold()))
    }
}

/// Credential source that fills in missing keys by asking the user
///
/// Keys already known (command-line flags, environment) are used as is;
/// only the missing ones are prompted for. With prompting disabled a
/// missing key is an error.
pub struct InteractiveCredentialSource<P: SecretPrompt = TerminalPrompt> {
    generator_key: Option<String>,
    evaluator_key: Option<String>,
    prompt: Option<P>,
}

impl InteractiveCredentialSource<TerminalPrompt> {
    pub fn new(generator_key: Option<String>, evaluator_key: Option<String>) -> Self {
        Self::with_prompt(generator_key, evaluator_key, TerminalPrompt)
    }
}

impl<P: SecretPrompt> InteractiveCredentialSource<P> {
    pub fn with_prompt(
        generator_key: Option<String>,
        evaluator_key: Option<String>,
        prompt: P,
    ) -> Self {
        Self {
            generator_key: non_empty(generator_key),
            evaluator_key: non_empty(evaluator_key),
            prompt: Some(prompt),
        }
    }

    /// Never prompt (non-interactive runs)
    pub fn without_prompt(mut self) -> Self {
        self.prompt = None;
        self
    }

    fn key_or_prompt(
        &self,
        known: &Option<String>,
        name: &str,
        label: &str,
    ) -> Result<String, CredentialError> {
        if let Some(key) = known {
            return Ok(key.clone());
        }

        let prompt = self.prompt.as_ref().ok_or_else(|| CredentialError::Missing {
            name: name.to_string(),
        })?;

        let answer = prompt
            .ask(label)
            .map_err(|e| CredentialError::Prompt(e.to_string()))?;

        non_empty(Some(answer)).ok_or_else(|| CredentialError::Missing {
            name: name.to_string(),
        })
    }
}

impl<P: SecretPrompt> CredentialSource for InteractiveCredentialSource<P> {
    fn resolve(&self) -> Result<Credentials, CredentialError> {
        let generator = self.key_or_prompt(&self.generator_key, "generator", "Gemini API key:")?;
        let evaluator =
            self.key_or_prompt(&self.evaluator_key, "evaluator", "Together.ai API key:")?;

        Ok(Credentials::new(generator, evaluator)?)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedPrompt {
        answers: RefCell<Vec<String>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().rev().map(|s| s.to_string()).collect()),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl SecretPrompt for ScriptedPrompt {
        fn ask(&self, label: &str) -> io::Result<String> {
            self.asked.borrow_mut().push(label.to_string());
            self.answers
                .borrow_mut()
                .pop()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no input"))
        }
    }

    #[test]
    fn test_known_keys_skip_prompt() {
        let source = InteractiveCredentialSource::with_prompt(
            Some("g".to_string()),
            Some("e".to_string()),
            ScriptedPrompt::new(&[]),
        );
        let creds = source.resolve().unwrap();
        assert_eq!(creds.generator_key(), "g");
        assert!(source.prompt.as_ref().unwrap().asked.borrow().is_empty());
    }

    #[test]
    fn test_only_missing_key_is_prompted() {
        let source = InteractiveCredentialSource::with_prompt(
            Some("g".to_string()),
            None,
            ScriptedPrompt::new(&["  typed-key  "]),
        );
        let creds = source.resolve().unwrap();
        assert_eq!(creds.evaluator_key(), "typed-key");
        assert_eq!(
            source.prompt.as_ref().unwrap().asked.borrow().as_slice(),
            &["Together.ai API key:".to_string()]
        );
    }

    #[test]
    fn test_empty_answer_is_missing() {
        let source =
            InteractiveCredentialSource::with_prompt(None, None, ScriptedPrompt::new(&[""]));
        let err = source.resolve().unwrap_err();
        assert!(matches!(err, CredentialError::Missing { ref name } if name == "generator"));
    }

    #[test]
    fn test_prompt_failure_is_reported() {
        let source = InteractiveCredentialSource::with_prompt(None, None, ScriptedPrompt::new(&[]));
        assert!(matches!(source.resolve(), Err(CredentialError::Prompt(_))));
    }

    #[test]
    fn test_without_prompt_fails_fast() {
        let source =
            InteractiveCredentialSource::with_prompt(Some(" ".to_string()), None, ScriptedPrompt::new(&["x"]))
                .without_prompt();
        assert!(matches!(source.resolve(), Err(CredentialError::Missing { .. })));
    }
}
