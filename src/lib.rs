//! derelict: degraded ship terminals
//!
//! Computer terminals aboard a derelict ship, typed out one character at a
//! time and glitching in proportion to how badly their hardware has decayed.
//!
//! | Module        | Purpose                                             |
//! |---------------|-----------------------------------------------------|
//! | `degradation` | Component integrity and the degradation score       |
//! | `terminal`    | Typewriter engine, boot scripts, commands           |
//! | `clock`       | Ship mission clock and timestamps                   |
//! | `screen`      | Screen trait and the terminal screen                |
//! | `config`      | TOML configuration                                  |
//! | `logging`     | Tracing subscriber writing to a log file            |
//! | `tui`         | ratatui/crossterm front end                         |

pub mod clock;
pub mod config;
pub mod degradation;
pub mod error;
pub mod logging;
pub mod screen;
pub mod terminal;
pub mod tui;

pub use clock::{ShipClock, TimestampProvider};
pub use config::{Config, TerminalSpec};
pub use degradation::{compute_degradation, ComponentIntegrity, DegradationScore};
pub use error::{ConfigError, TerminalError};
pub use screen::{DisplayState, Screen, ScreenSignal, TerminalScreen};
pub use terminal::{KeyInput, TypewriterConfig, TypewriterEngine};
