//! Screens driven by the front end.
//!
//! A screen receives frame ticks and key events and describes what should be
//! drawn. It knows nothing about the terminal backend.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::terminal::{
    CommandAction, CommandProcessor, KeyInput, Phase, TerminalCommands, TypewriterConfig,
    TypewriterEngine,
};

/// What the front end should do after a screen call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSignal {
    Continue,
    /// Leave the screen
    Exit,
}

/// Snapshot of what to draw for a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Display lines, with the live input appended to the last one
    pub lines: Vec<String>,
    /// Whether a command is being typed
    pub awaiting_input: bool,
    /// Blink phase of the input cursor
    pub cursor_visible: bool,
}

/// A view that can be ticked, fed keys and rendered.
pub trait Screen {
    /// Advance animations by `delta_time` seconds.
    fn advance(&mut self, delta_time: f64) -> ScreenSignal;

    fn handle_key(&mut self, key: KeyInput) -> ScreenSignal;

    fn render(&self) -> DisplayState;

    /// Title shown around the screen.
    fn title(&self) -> &str {
        ""
    }
}

/// A ship terminal session as a screen.
pub struct TerminalScreen<P = TerminalCommands, R = StdRng> {
    title: String,
    engine: TypewriterEngine<R>,
    commands: P,
    blink_interval: f64,
    blink_timer: f64,
    cursor_visible: bool,
    exit_pending: bool,
}

impl<P: CommandProcessor, R: Rng> TerminalScreen<P, R> {
    pub fn new(
        title: impl Into<String>,
        engine: TypewriterEngine<R>,
        commands: P,
        config: &TypewriterConfig,
    ) -> Self {
        Self {
            title: title.into(),
            engine,
            commands,
            blink_interval: config.cursor_blink_interval,
            blink_timer: 0.0,
            cursor_visible: true,
            exit_pending: false,
        }
    }

    pub fn engine(&self) -> &TypewriterEngine<R> {
        &self.engine
    }

    fn update_blink(&mut self, delta_time: f64) {
        if !delta_time.is_finite() || delta_time < 0.0 || self.blink_interval <= 0.0 {
            return;
        }
        self.blink_timer += delta_time;
        let flips = (self.blink_timer / self.blink_interval).floor();
        self.blink_timer %= self.blink_interval;
        if flips as u64 % 2 == 1 {
            self.cursor_visible = !self.cursor_visible;
        }
    }
}

impl<P: CommandProcessor, R: Rng> Screen for TerminalScreen<P, R> {
    fn advance(&mut self, delta_time: f64) -> ScreenSignal {
        let tick = self.engine.advance(delta_time);
        self.update_blink(delta_time);

        match tick.finished {
            Some(Phase::Boot) => {
                self.cursor_visible = true;
                self.blink_timer = 0.0;
            }
            Some(Phase::Response) if self.exit_pending => {
                info!(terminal = %self.title, "logged out");
                return ScreenSignal::Exit;
            }
            _ => {}
        }
        ScreenSignal::Continue
    }

    fn handle_key(&mut self, key: KeyInput) -> ScreenSignal {
        if key == KeyInput::Escape {
            return ScreenSignal::Exit;
        }
        if !self.engine.is_accepting_input() {
            return ScreenSignal::Continue;
        }

        match key {
            KeyInput::Char { ch, shift } => {
                self.engine.type_char(ch, shift);
            }
            KeyInput::Backspace => self.engine.backspace(),
            KeyInput::Enter => {
                if self.engine.submit(&mut self.commands) == Some(CommandAction::Exit) {
                    self.exit_pending = true;
                }
            }
            KeyInput::Escape => {}
        }
        ScreenSignal::Continue
    }

    fn render(&self) -> DisplayState {
        let mut lines = self.engine.lines().to_vec();
        let awaiting_input = self.engine.is_accepting_input();
        if awaiting_input {
            if let Some(last) = lines.last_mut() {
                last.push_str(self.engine.input());
            }
        }
        DisplayState {
            lines,
            awaiting_input,
            cursor_visible: self.cursor_visible,
        }
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::degradation::{ComponentIntegrity, DegradationScore};
    use crate::terminal::{ScriptLine, PROMPT};
    use rand::SeedableRng;

    fn screen(script: Vec<ScriptLine>) -> TerminalScreen {
        let config = TypewriterConfig::default();
        let engine = TypewriterEngine::new(
            script,
            DegradationScore::ZERO,
            &config,
            StdRng::seed_from_u64(11),
        );
        let commands = TerminalCommands::new(ComponentIntegrity::pristine(), DegradationScore::ZERO);
        TerminalScreen::new("MOTHER", engine, commands, &config)
    }

    fn type_line(screen: &mut TerminalScreen, text: &str) {
        for ch in text.chars() {
            screen.handle_key(KeyInput::char(ch));
        }
        screen.handle_key(KeyInput::Enter);
    }

    #[test]
    fn escape_always_exits() {
        let mut screen = screen(vec![ScriptLine::new("booting", 1.0)]);
        assert_eq!(screen.handle_key(KeyInput::Escape), ScreenSignal::Exit);
    }

    #[test]
    fn render_appends_live_input() {
        let mut screen = screen(Vec::new());
        screen.handle_key(KeyInput::char('h'));
        screen.handle_key(KeyInput::char('i'));
        let state = screen.render();
        assert!(state.awaiting_input);
        assert_eq!(state.lines, vec![format!("{}hi", PROMPT)]);
    }

    #[test]
    fn keys_are_ignored_while_booting() {
        let mut screen = screen(vec![ScriptLine::new("booting", 1.0)]);
        assert_eq!(
            screen.handle_key(KeyInput::char('x')),
            ScreenSignal::Continue
        );
        assert_eq!(screen.engine().input(), "");
        assert!(!screen.render().awaiting_input);
    }

    #[test]
    fn exit_command_signals_after_logout_line() {
        let mut screen = screen(Vec::new());
        type_line(&mut screen, "exit");
        assert!(!screen.render().awaiting_input);

        let mut signal = ScreenSignal::Continue;
        for _ in 0..100 {
            signal = screen.advance(0.1);
            if signal == ScreenSignal::Exit {
                break;
            }
        }
        assert_eq!(signal, ScreenSignal::Exit);
        assert!(screen
            .render()
            .lines
            .contains(&"Logging out...".to_string()));
    }

    #[test]
    fn other_commands_keep_the_session() {
        let mut screen = screen(Vec::new());
        type_line(&mut screen, "help");
        for _ in 0..100 {
            assert_eq!(screen.advance(0.1), ScreenSignal::Continue);
        }
        assert!(screen.render().awaiting_input);
    }

    #[test]
    fn cursor_blinks_and_is_visible_after_boot() {
        let mut screen = screen(vec![ScriptLine::new("x", 10.0)]);
        screen.advance(0.6);
        assert!(!screen.render().cursor_visible);

        // Boot finishes within this tick
        screen.advance(20.0);
        assert!(screen.engine().boot_completed());
        assert!(screen.render().cursor_visible);
    }

    #[test]
    fn whole_blink_periods_cancel_out() {
        let mut screen = screen(Vec::new());
        screen.advance(1.2);
        assert!(screen.render().cursor_visible);
        screen.advance(0.4);
        assert!(!screen.render().cursor_visible);
    }

    #[test]
    fn huge_tick_finishes_boot_and_returns() {
        let mut screen = screen(vec![ScriptLine::new("booting", 1.0)]);
        assert_eq!(screen.advance(1e17), ScreenSignal::Continue);
        assert!(screen.engine().boot_completed());
        assert!(screen.render().cursor_visible);

        // Idle in input mode with an absurd frame delta
        assert_eq!(screen.advance(1e17), ScreenSignal::Continue);
        assert!(screen.render().awaiting_input);
    }

    #[test]
    fn title_is_designation() {
        let screen = screen(Vec::new());
        assert_eq!(screen.title(), "MOTHER");
    }
}
