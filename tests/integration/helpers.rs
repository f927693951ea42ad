//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use derelict::terminal::{CommandProcessor, TerminalCommands};
use derelict::{ComponentIntegrity, DegradationScore, TypewriterConfig, TypewriterEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Engine over `script` with default tuning and a fixed seed.
pub fn seeded_engine(
    script: Vec<derelict::terminal::ScriptLine>,
    score: u32,
) -> TypewriterEngine<StdRng> {
    TypewriterEngine::new(
        script,
        DegradationScore::new(score),
        &TypewriterConfig::default(),
        StdRng::seed_from_u64(2175),
    )
}

/// Tick at 60 fps until the engine waits for input.
pub fn run_until_input(engine: &mut TypewriterEngine<StdRng>) -> usize {
    for frame in 0..100_000 {
        if engine.is_accepting_input() {
            return frame;
        }
        engine.advance(1.0 / 60.0);
    }
    panic!("engine never reached input mode");
}

/// Type `command` and press Enter.
pub fn submit<P: CommandProcessor>(
    engine: &mut TypewriterEngine<StdRng>,
    processor: &mut P,
    command: &str,
) {
    for ch in command.chars() {
        engine.type_char(ch, false);
    }
    engine.submit(processor);
}

/// Built-in commands for a pristine terminal.
pub fn pristine_commands() -> TerminalCommands {
    TerminalCommands::new(ComponentIntegrity::pristine(), DegradationScore::ZERO)
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Path of `name` inside `dir`, as a string for CLI arguments.
pub fn arg_path(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}
