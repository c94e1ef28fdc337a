//! Chat command classification

/// Inputs that end the session
const EXIT_WORDS: &[&str] = &["salir", "exit"];

/// Inputs that wipe the conversation
const CLEAR_WORDS: &[&str] = &["limpiar", "clear", "reset"];

/// What a raw input line asks the chat session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// End the session
    Exit,
    /// Clear the conversation history
    Clear,
    /// Anything else, blank lines included, is a message for the pipeline
    /// (kept verbatim)
    Message(String),
}

impl ChatCommand {
    /// Classify a raw line. Command words are matched case-insensitively
    /// after trimming; messages keep the line exactly as typed.
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();

        if EXIT_WORDS.contains(&normalized.as_str()) {
            ChatCommand::Exit
        } else if CLEAR_WORDS.contains(&normalized.as_str()) {
            ChatCommand::Clear
        } else {
            ChatCommand::Message(line.to_string())
        }
    }

    /// Word list shown in the welcome banner
    pub fn exit_words() -> &'static [&'static str] {
        EXIT_WORDS
    }

    pub fn clear_words() -> &'static [&'static str] {
        CLEAR_WORDS
    }
}
