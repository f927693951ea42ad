//! Degraded ship terminal engine.
//!
//! A terminal types out its boot transcript character by character, then
//! accepts commands and types out their responses the same way. How broken
//! the terminal feels (erratic timing, corrupted characters) is driven by
//! its [`DegradationScore`](crate::degradation::DegradationScore).
//!
//! # Architecture
//!
//! - `buffer`: display lines and the command being typed
//! - `cursor`: typewriter position as a tagged state with a pure reducer
//! - `effects`: jitter, pauses and corruption
//! - `script`: boot transcripts and response lines
//! - `commands`: the command processor seam and built-in commands
//! - `engine`: the tick-driven state machine tying it together

pub mod buffer;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod effects;
pub mod engine;
pub mod input;
pub mod script;

pub use buffer::{DisplayBuffer, InputBuffer, PROMPT};
pub use commands::{CommandAction, CommandOutcome, CommandProcessor, TerminalCommands};
pub use config::TypewriterConfig;
pub use cursor::{Cursor, CursorEvent, Position};
pub use effects::Effects;
pub use engine::{EngineState, Phase, Tick, TypewriterEngine};
pub use input::KeyInput;
pub use script::{boot_sequence, load_script, ResponseLine, ScriptLine};

use rand::Rng;
use tracing::info;

use crate::config::TerminalSpec;
use crate::degradation::{compute_degradation, ComponentIntegrity, DegradationScore};
use crate::error::TerminalError;

/// Everything needed to run one terminal session.
pub struct TerminalBuild {
    pub designation: String,
    pub integrity: ComponentIntegrity,
    pub score: DegradationScore,
    pub script: Vec<ScriptLine>,
}

/// Resolve a configured terminal into its boot script and degradation.
///
/// Uses the terminal's custom boot script when one is configured, otherwise
/// the standard transcript for its kind.
pub fn build_terminal<R: Rng + ?Sized>(
    spec: &TerminalSpec,
    config: &TypewriterConfig,
    rng: &mut R,
) -> Result<TerminalBuild, TerminalError> {
    let integrity = ComponentIntegrity::try_from(spec.integrity)?;
    let score = compute_degradation(&integrity);

    let designation = script::designation(&spec.kind, rng);
    let script = match &spec.boot_script {
        Some(path) => load_script(path)?,
        None => boot_sequence(&designation, &integrity, config),
    };

    info!(
        terminal = %spec.name,
        degradation = score.value(),
        lines = script.len(),
        "terminal built"
    );

    Ok(TerminalBuild {
        designation,
        integrity,
        score,
        script,
    })
}
