//! Console output formatter for chat turns

use crate::output::markdown::MarkdownRenderer;
use colored::Colorize;
use duo_domain::{ChatCommand, Fallback, Model, TurnOutcome};

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed when the session starts
    pub fn welcome(generator: &Model, evaluator: &Model) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Bienvenido al Chatbot".blue().bold()));
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Generator:".cyan().bold(),
            generator,
            "Evaluator:".cyan().bold(),
            evaluator
        ));
        output.push_str(&format!(
            "{}\n",
            format!(
                "Escribe {} para salir, {} para reiniciar la memoria.",
                ChatCommand::exit_words().join("/"),
                ChatCommand::clear_words().join("/")
            )
            .dimmed()
        ));

        output
    }

    /// Prompt shown by the line editor
    pub fn prompt() -> String {
        format!("{} ", "Usuario:".bold())
    }

    /// Final answer for one turn
    pub fn format_answer(outcome: &TurnOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Chatbot:".green().bold()));
        output.push_str(&MarkdownRenderer::render(&outcome.final_answer));
        output.push('\n');

        if let Some(note) = Self::fallback_note(outcome.fallback) {
            output.push_str(&format!("\n{}\n", note.dimmed()));
        }

        output
    }

    /// Notice printed after a reset command
    pub fn cleared() -> String {
        format!("{}", "Chatbot: Memoria reiniciada.".yellow().bold())
    }

    /// Farewell printed on exit, EOF or interrupt
    pub fn farewell() -> String {
        format!("{}", "Chatbot: ¡Hasta luego!".red().bold())
    }

    /// Startup error (missing key, bad config)
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message.red())
    }

    fn fallback_note(fallback: Fallback) -> Option<&'static str> {
        match fallback {
            Fallback::None => None,
            Fallback::GeneratorApology => Some("(the generator failed; showing the reviewed apology)"),
            Fallback::Unevaluated => Some("(the evaluator failed; showing the unreviewed draft)"),
            Fallback::Both => Some("(both services failed)"),
        }
    }
}
