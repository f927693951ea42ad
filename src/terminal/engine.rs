//! The typewriter engine.
//!
//! Reveals the boot script one character at a time, then alternates between
//! accepting a command and revealing the command's response lines. Per
//! character delays and corruption come from [`Effects`], so the degradation
//! score shapes how broken the terminal feels.
//!
//! The engine is driven from outside: `advance` once per frame with the
//! elapsed seconds, and the editing/submit methods for each key event.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use super::buffer::{DisplayBuffer, InputBuffer, PROMPT};
use super::commands::{CommandAction, CommandProcessor};
use super::config::TypewriterConfig;
use super::cursor::{reduce, Cursor, CursorEvent, Position};
use super::effects::Effects;
use super::input::{is_printable, shift_char};
use super::script::{ResponseLine, ScriptLine, FALLBACK_TIMESTAMP};
use crate::clock::TimestampProvider;
use crate::degradation::DegradationScore;

/// Coarse engine state, derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    BootTyping,
    InputMode,
    ResponseTyping,
}

/// Which typing phase finished during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Boot,
    Response,
}

/// Result of a single `advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// Characters revealed during the tick
    pub revealed: usize,
    /// Typing phase that completed during the tick, if any
    pub finished: Option<Phase>,
}

/// Typewriter state for one terminal session.
pub struct TypewriterEngine<R = StdRng> {
    effects: Effects,
    response_speed: f64,
    max_reveals_per_tick: usize,

    script: Vec<ScriptLine>,
    responses: Vec<ResponseLine>,

    cursor: Cursor,
    /// Resolved text of the active source line
    active: Option<Vec<char>>,
    /// Delay required before the next character
    char_delay: Option<f64>,
    timer: f64,

    buffer: DisplayBuffer,
    input: InputBuffer,
    boot_completed: bool,

    timestamps: Option<Box<dyn TimestampProvider>>,
    rng: R,
}

impl<R: Rng> TypewriterEngine<R> {
    /// Create an engine that starts typing `script` on the first tick.
    ///
    /// An empty script skips straight to the prompt.
    pub fn new(
        script: Vec<ScriptLine>,
        score: DegradationScore,
        config: &TypewriterConfig,
        rng: R,
    ) -> Self {
        let (cursor, buffer, boot_completed) = if script.is_empty() {
            (Cursor::Input, DisplayBuffer::with_prompt(), true)
        } else {
            (Cursor::Boot(Position::default()), DisplayBuffer::new(), false)
        };

        Self {
            effects: Effects::new(config, score),
            response_speed: config.fast_speed,
            max_reveals_per_tick: config.max_reveals_per_tick.max(1),
            script,
            responses: Vec::new(),
            cursor,
            active: None,
            char_delay: None,
            timer: 0.0,
            buffer,
            input: InputBuffer::new(),
            boot_completed,
            timestamps: None,
            rng,
        }
    }

    /// Wire in the clock that resolves timestamp lines.
    pub fn with_timestamps(mut self, provider: Box<dyn TimestampProvider>) -> Self {
        self.timestamps = Some(provider);
        self
    }

    // === Queries ===

    pub fn state(&self) -> EngineState {
        match self.cursor {
            Cursor::Boot(_) => EngineState::BootTyping,
            Cursor::Input => EngineState::InputMode,
            Cursor::Response(_) => EngineState::ResponseTyping,
        }
    }

    pub fn is_accepting_input(&self) -> bool {
        self.cursor == Cursor::Input
    }

    pub fn boot_completed(&self) -> bool {
        self.boot_completed
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    // === Ticking ===

    /// Advance the animation by `delta_time` seconds.
    ///
    /// Reveals as many characters as the accumulated time pays for, each one
    /// consuming its own jittered delay, up to `max_reveals_per_tick`. Any
    /// time left over carries into the next tick. Time spent waiting for
    /// input is not accumulated.
    pub fn advance(&mut self, delta_time: f64) -> Tick {
        let mut tick = Tick::default();
        if !delta_time.is_finite() || delta_time < 0.0 || self.cursor == Cursor::Input {
            return tick;
        }
        self.timer += delta_time;

        loop {
            let pos = match self.cursor {
                Cursor::Input => break,
                Cursor::Boot(pos) | Cursor::Response(pos) => pos,
            };

            let Some(ch) = self.next_char(pos) else {
                if let Some(phase) = self.finish_line() {
                    tick.finished = Some(phase);
                    break;
                }
                continue;
            };

            if tick.revealed >= self.max_reveals_per_tick {
                break;
            }
            let delay = self.current_delay();
            if self.timer < delay {
                break;
            }

            let shown = self.effects.corrupt_revealed(&mut self.rng, ch);
            self.buffer.push_char(pos.write_line, shown);
            self.timer -= delay;
            self.char_delay = None;
            self.cursor = reduce(self.cursor, CursorEvent::Revealed);
            tick.revealed += 1;
        }

        tick
    }

    /// Next character of the active line, resolving the line if needed.
    fn next_char(&mut self, pos: Position) -> Option<char> {
        if self.active.is_none() {
            let text = self.resolve_line();
            self.active = Some(text.chars().collect());
        }
        self.active.as_ref().and_then(|chars| chars.get(pos.char).copied())
    }

    /// Text of the line under the cursor, with the timestamp substituted.
    fn resolve_line(&self) -> String {
        match self.cursor {
            Cursor::Boot(pos) => {
                let line = &self.script[pos.line];
                if line.is_timestamp() {
                    self.timestamp()
                } else {
                    line.text.clone()
                }
            }
            Cursor::Response(pos) => self.responses[pos.line].text.clone(),
            Cursor::Input => String::new(),
        }
    }

    fn timestamp(&self) -> String {
        match &self.timestamps {
            Some(provider) => provider.timestamp(),
            None => FALLBACK_TIMESTAMP.to_string(),
        }
    }

    fn current_speed(&self) -> f64 {
        match self.cursor {
            Cursor::Boot(pos) => self.script[pos.line].speed,
            Cursor::Response(pos) => self.responses[pos.line].speed,
            Cursor::Input => 0.0,
        }
    }

    fn current_delay(&mut self) -> f64 {
        match self.char_delay {
            Some(delay) => delay,
            None => {
                let speed = self.current_speed();
                let delay = self.effects.char_delay(&mut self.rng, speed);
                self.char_delay = Some(delay);
                delay
            }
        }
    }

    /// Move past an exhausted line. Returns the phase that just completed.
    fn finish_line(&mut self) -> Option<Phase> {
        let (pause, next_same_line, total) = match self.cursor {
            Cursor::Boot(pos) => (
                self.script[pos.line].pause,
                self.script
                    .get(pos.line + 1)
                    .is_some_and(|next| next.same_line),
                self.script.len(),
            ),
            Cursor::Response(_) => (false, false, self.responses.len()),
            Cursor::Input => return None,
        };

        if pause {
            self.timer = self.effects.pause_offset(&mut self.rng);
        }

        let previous = self.cursor;
        self.cursor = reduce(
            previous,
            CursorEvent::LineFinished {
                total,
                next_same_line,
            },
        );
        self.active = None;
        self.char_delay = None;

        match (previous, self.cursor) {
            (_, Cursor::Boot(pos)) | (_, Cursor::Response(pos)) => {
                if pos.write_line >= self.buffer.len() {
                    self.buffer.push_blank();
                }
                None
            }
            (Cursor::Boot(_), Cursor::Input) => {
                self.complete_boot();
                Some(Phase::Boot)
            }
            (Cursor::Response(_), Cursor::Input) => {
                self.responses.clear();
                self.buffer.push_prompt();
                self.input.clear();
                self.timer = 0.0;
                Some(Phase::Response)
            }
            (Cursor::Input, Cursor::Input) => None,
        }
    }

    fn complete_boot(&mut self) {
        self.timer = 0.0;
        if !self.boot_completed {
            self.boot_completed = true;
            info!(
                degradation = self.effects.score().value(),
                lines = self.buffer.len(),
                "boot sequence complete"
            );
        }
    }

    // === Commands ===

    /// Start revealing response lines below the committed command.
    ///
    /// Only the first line's display slot is created here; later lines add
    /// their own as the cursor reaches them. An empty list shows a prompt
    /// immediately. Ignored (returns false) unless the engine is waiting
    /// for input.
    pub fn start_typing_response(&mut self, lines: Vec<ResponseLine>) -> bool {
        if !self.is_accepting_input() {
            warn!(state = ?self.state(), "response started while not accepting input");
            return false;
        }
        if lines.is_empty() {
            self.buffer.push_prompt();
            return true;
        }

        self.responses = lines;
        let write_line = self.buffer.push_blank();
        self.cursor = reduce(self.cursor, CursorEvent::ResponseStarted { write_line });
        self.active = None;
        self.char_delay = None;
        self.timer = 0.0;
        true
    }

    /// Commit the typed command and hand it to `processor`.
    ///
    /// Returns the action the processor requested, if any. Does nothing
    /// while boot or a response is still typing.
    pub fn submit<P>(&mut self, processor: &mut P) -> Option<CommandAction>
    where
        P: CommandProcessor + ?Sized,
    {
        if !self.is_accepting_input() {
            return None;
        }

        let raw = self.input.take();
        self.buffer.replace_last(format!("{}{}", PROMPT, raw));
        let command = raw.trim().to_lowercase();
        debug!(command = %command, "command submitted");

        let outcome = processor.process(&command);

        if outcome.action == Some(CommandAction::Clear) {
            debug!("display cleared");
            self.buffer.clear_to_prompt();
            if outcome.lines.is_empty() {
                return outcome.action;
            }
        }

        let speed = self.response_speed;
        let lines = outcome
            .lines
            .into_iter()
            .map(|text| ResponseLine::new(text, speed))
            .collect();
        self.start_typing_response(lines);
        outcome.action
    }

    // === Editing ===

    /// Type a character into the command line.
    ///
    /// Only printable ASCII is accepted. The character may be corrupted on
    /// its way in when the terminal is degraded enough.
    pub fn type_char(&mut self, ch: char, shift: bool) -> bool {
        if !self.is_accepting_input() || !is_printable(ch) {
            return false;
        }
        let ch = if shift { shift_char(ch) } else { ch };
        let ch = self.effects.corrupt(&mut self.rng, ch);
        self.input.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        if self.is_accepting_input() {
            self.input.backspace();
        }
    }
}
