//! Boot scripts and response lines.
//!
//! A boot script is the fixed transcript a terminal types out when it powers
//! on. The standard transcript is built from the terminal's kind and
//! integrity; custom transcripts can be loaded from JSON files of the form
//!
//! ```json
//! [
//!   { "text": "MOTHER rebooting ", "speed": 0.03, "pause": true },
//!   { "text": ".......", "speed": 0.25, "pause": true, "same_line": true }
//! ]
//! ```

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::buffer::PROMPT;
use super::config::TypewriterConfig;
use crate::degradation::ComponentIntegrity;
use crate::error::TerminalError;

/// Line text replaced by the live ship timestamp when it becomes active.
pub const TIMESTAMP_SENTINEL: &str = "TIME_STAMP";

/// Timestamp used when no clock is wired into the engine.
pub const FALLBACK_TIMESTAMP: &str = "16 DEC 2175  SHIP TIME: 00:00:00";

/// One line of a boot script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptLine {
    pub text: String,
    /// Base seconds per character
    pub speed: f64,
    /// Wait a little after the line is finished
    pub pause: bool,
    /// Continue on the previous line's display row
    pub same_line: bool,
}

impl ScriptLine {
    pub fn new(text: impl Into<String>, speed: f64) -> Self {
        Self {
            text: text.into(),
            speed,
            pause: false,
            same_line: false,
        }
    }

    pub fn with_pause(mut self) -> Self {
        self.pause = true;
        self
    }

    pub fn on_same_line(mut self) -> Self {
        self.same_line = true;
        self
    }

    /// Whether this line stands for the live timestamp.
    pub fn is_timestamp(&self) -> bool {
        self.text == TIMESTAMP_SENTINEL
    }
}

/// One line of a command response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseLine {
    pub text: String,
    pub speed: f64,
}

impl ResponseLine {
    pub fn new(text: impl Into<String>, speed: f64) -> Self {
        Self {
            text: text.into(),
            speed,
        }
    }
}

/// Display designation for a terminal kind.
///
/// MOTHER units carry a randomised firmware revision.
pub fn designation<R: Rng + ?Sized>(kind: &str, rng: &mut R) -> String {
    if kind.eq_ignore_ascii_case("MOTHER") {
        let major = rng.gen_range(206..219);
        let minor = rng.gen_range(63..89);
        format!("{} MOT-{}.{}", kind, major, minor)
    } else {
        format!("{} terminal", kind)
    }
}

/// Build the standard boot transcript for a terminal.
///
/// `terminal` is the display designation, see [`designation`].
pub fn boot_sequence(
    terminal: &str,
    integrity: &ComponentIntegrity,
    speeds: &TypewriterConfig,
) -> Vec<ScriptLine> {
    let fast = speeds.fast_speed;
    let slow = speeds.slow_speed;
    let instant = speeds.instant_speed;

    let mut lines = vec![
        ScriptLine::new(format!("{} rebooting ", terminal), fast).with_pause(),
        ScriptLine::new(".......", slow).with_pause().on_same_line(),
        ScriptLine::new("loader 2175-rc2-00976-WYCorp cksum: 9f2d1e6a", fast).with_pause(),
        ScriptLine::new("clearing /tmp", fast).with_pause(),
        ScriptLine::new("starting network: rshd rexecd rlogind rwhod", fast).with_pause(),
        ScriptLine::new("System Checks ", fast),
    ];

    for (label, value) in [
        ("CPU ", integrity.cpu()),
        ("Memory ", integrity.memory()),
        ("Storage ", integrity.storage()),
    ] {
        lines.push(ScriptLine::new(label, fast));
        lines.push(ScriptLine::new("....", slow).with_pause().on_same_line());
        lines.push(
            ScriptLine::new(format!("{}%", value), instant)
                .with_pause()
                .on_same_line(),
        );
    }

    lines.extend([
        ScriptLine::new("OS load ", fast),
        ScriptLine::new(
            "TTY=pts/0; PWD=/var/log; USER = root; COMMAND=usr/bin/tail -f",
            fast,
        )
        .with_pause(),
        ScriptLine::new("....", slow).with_pause().on_same_line(),
        ScriptLine::new("-".repeat(50), instant).with_pause(),
        ScriptLine::new("", instant),
        ScriptLine::new(TIMESTAMP_SENTINEL, fast).with_pause(),
        ScriptLine::new("MOTHER 6000 OPERATING SYSTEM", fast),
        ScriptLine::new("", instant),
        ScriptLine::new("Enter command", fast),
        ScriptLine::new(PROMPT, instant),
    ]);

    lines
}

/// A script line as written in a file, before validation.
#[derive(Debug, Deserialize)]
struct RawScriptLine {
    text: Option<String>,
    speed: Option<f64>,
    #[serde(default)]
    pause: bool,
    #[serde(default)]
    same_line: bool,
}

/// Validate raw script lines, reporting the first malformed one.
fn validate_lines(raw: Vec<RawScriptLine>) -> Result<Vec<ScriptLine>, TerminalError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, line)| {
            let text = line.text.ok_or_else(|| TerminalError::MalformedScript {
                index,
                field: "missing text".to_string(),
            })?;
            let speed = line.speed.ok_or_else(|| TerminalError::MalformedScript {
                index,
                field: "missing speed".to_string(),
            })?;
            if !speed.is_finite() || speed < 0.0 {
                return Err(TerminalError::MalformedScript {
                    index,
                    field: format!("invalid speed {}", speed),
                });
            }
            Ok(ScriptLine {
                text,
                speed,
                pause: line.pause,
                same_line: line.same_line,
            })
        })
        .collect()
}

/// Parse a JSON boot script.
pub fn parse_script(json: &str, path: &Path) -> Result<Vec<ScriptLine>, TerminalError> {
    let raw: Vec<RawScriptLine> =
        serde_json::from_str(json).map_err(|e| TerminalError::ScriptParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    validate_lines(raw)
}

/// Load and validate a JSON boot script from disk.
pub fn load_script(path: &Path) -> Result<Vec<ScriptLine>, TerminalError> {
    let json = fs::read_to_string(path).map_err(|source| TerminalError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json, path)
}
