//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use duo_application::{
    ChatSession, EvaluatorClient, GeneratorClient, NoProgress, ProgressNotifier, SessionEvent,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::Path;
use tracing::{debug, warn};

/// Interactive chat REPL
pub struct ChatRepl<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> {
    session: ChatSession<G, E>,
    config: ReplConfig,
}

impl<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> ChatRepl<G, E> {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession<G, E>, config: ReplConfig) -> Self {
        Self { session, config }
    }

    /// Run the interactive REPL until exit, end of input or interrupt
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            ensure_history_dir(path);
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let reporter = ProgressReporter::new();
        let progress: &dyn ProgressNotifier = if self.config.show_progress {
            &reporter
        } else {
            &NoProgress
        };

        loop {
            match rl.readline(&ConsoleFormatter::prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }

                    match self
                        .session
                        .handle_line_with_progress(&line, progress)
                        .await
                    {
                        Ok(event) => {
                            println!("{}", render_event(&event));
                            if ends_session(&event) {
                                break;
                            }
                        }
                        Err(e) => {
                            debug!("Session refused input: {}", e);
                            break;
                        }
                    }
                }
                Err(err) => {
                    println!("{}", input_closed(&err));
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let use_case = self.session.use_case();
        println!();
        println!(
            "{}",
            ConsoleFormatter::welcome(use_case.generator().model(), use_case.evaluator().model())
        );
    }
}

/// Console text for one session event
fn render_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Farewell => ConsoleFormatter::farewell(),
        SessionEvent::Cleared { .. } => ConsoleFormatter::cleared(),
        SessionEvent::Answered(outcome) => ConsoleFormatter::format_answer(outcome),
    }
}

fn ends_session(event: &SessionEvent) -> bool {
    matches!(event, SessionEvent::Farewell)
}

/// EOF and Ctrl-C end the session like an exit command
fn input_closed(err: &ReadlineError) -> String {
    if !matches!(err, ReadlineError::Interrupted | ReadlineError::Eof) {
        warn!("Input error: {:?}", err);
    }
    ConsoleFormatter::farewell()
}

fn ensure_history_dir(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            debug!("Cannot create history directory {}: {}", parent.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_domain::{Fallback, TurnOutcome};

    fn answered() -> SessionEvent {
        SessionEvent::Answered(TurnOutcome::new("hola", "borrador", "respuesta", Fallback::None))
    }

    #[test]
    fn test_only_farewell_ends_session() {
        assert!(ends_session(&SessionEvent::Farewell));
        assert!(!ends_session(&SessionEvent::Cleared { removed: 2 }));
        assert!(!ends_session(&answered()));
    }

    #[test]
    fn test_event_rendering() {
        colored::control::set_override(false);
        assert_eq!(render_event(&SessionEvent::Farewell), "Chatbot: ¡Hasta luego!");
        assert_eq!(
            render_event(&SessionEvent::Cleared { removed: 0 }),
            "Chatbot: Memoria reiniciada."
        );
        assert_eq!(render_event(&answered()), "Chatbot:\nrespuesta\n");
    }

    #[test]
    fn test_eof_and_interrupt_say_goodbye() {
        colored::control::set_override(false);
        assert_eq!(input_closed(&ReadlineError::Eof), "Chatbot: ¡Hasta luego!");
        assert_eq!(input_closed(&ReadlineError::Interrupted), "Chatbot: ¡Hasta luego!");
    }

    #[test]
    fn test_history_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("duo").join("history.txt");

        ensure_history_dir(&path);

        assert!(path.parent().unwrap().is_dir());
    }
}
