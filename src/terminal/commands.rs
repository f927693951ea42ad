//! Command processing for terminal sessions.

use crate::degradation::{ComponentIntegrity, DegradationScore};

/// Side effect requested by a command, carried out by the engine or screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Reset the display to a single prompt line
    Clear,
    /// Leave the terminal once the response has been shown
    Exit,
}

/// What a command produced: response text and an optional action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub action: Option<CommandAction>,
}

impl CommandOutcome {
    /// No response text; the engine shows a fresh prompt at once.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: CommandAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Interprets submitted commands.
///
/// Commands arrive trimmed and lower-cased. Unknown commands are answered
/// with ordinary response text, never with an error.
pub trait CommandProcessor {
    fn process(&mut self, command: &str) -> CommandOutcome;
}

impl<F> CommandProcessor for F
where
    F: FnMut(&str) -> CommandOutcome,
{
    fn process(&mut self, command: &str) -> CommandOutcome {
        self(command)
    }
}

/// Built-in command set of a ship terminal.
#[derive(Debug, Clone)]
pub struct TerminalCommands {
    integrity: ComponentIntegrity,
    score: DegradationScore,
}

impl TerminalCommands {
    pub fn new(integrity: ComponentIntegrity, score: DegradationScore) -> Self {
        Self { integrity, score }
    }
}

impl CommandProcessor for TerminalCommands {
    fn process(&mut self, command: &str) -> CommandOutcome {
        match command {
            "" => CommandOutcome::silent(),
            "help" => CommandOutcome::lines([
                "Available commands:",
                "  help    - Show this help",
                "  status  - Show system status",
                "  clear   - Clear terminal",
                "  exit    - Return to menu / quit",
            ]),
            "status" => CommandOutcome::lines([
                format!("System degradation: {}%", self.score),
                self.integrity.to_string(),
            ]),
            "clear" => CommandOutcome::silent().with_action(CommandAction::Clear),
            "exit" | "quit" | "back" | "leave" => {
                CommandOutcome::lines(["Logging out..."]).with_action(CommandAction::Exit)
            }
            other => CommandOutcome::lines([format!("Command not found: {}", other)]),
        }
    }
}
