//! Tuning for the typewriter effect.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Timing, jitter and corruption settings shared by every terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Base seconds per character for regular text
    pub fast_speed: f64,
    /// Base seconds per character for progress dots
    pub slow_speed: f64,
    /// Base seconds per character for text that should appear at once
    pub instant_speed: f64,
    /// Extra wait after a line flagged `pause` (before jitter)
    pub pause_duration: f64,
    /// Jitter multiplier range for a healthy system
    pub normal_jitter: [f64; 2],
    /// Jitter multiplier range for an unstable system
    pub degraded_jitter: [f64; 2],
    /// Degradation score above which characters may be corrupted
    pub glitch_threshold: u32,
    /// Chance that an eligible character is corrupted
    pub glitch_chance: f64,
    /// Alphabet corrupted characters are drawn from
    pub glitch_chars: String,
    /// Upper bound on characters revealed by a single tick
    pub max_reveals_per_tick: usize,
    /// Seconds between cursor blinks
    pub cursor_blink_interval: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            fast_speed: 0.03,
            slow_speed: 0.25,
            instant_speed: 0.0,
            pause_duration: 0.6,
            normal_jitter: [0.8, 1.2],
            degraded_jitter: [0.5, 3.0],
            glitch_threshold: 40,
            glitch_chance: 0.05,
            glitch_chars: "#%&@$*!?/\\|<>~^".to_string(),
            max_reveals_per_tick: 256,
            cursor_blink_interval: 0.5,
        }
    }
}

impl TypewriterConfig {
    /// Check that every setting is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("typewriter.fast_speed", self.fast_speed),
            ("typewriter.slow_speed", self.slow_speed),
            ("typewriter.instant_speed", self.instant_speed),
            ("typewriter.pause_duration", self.pause_duration),
        ] {
            non_negative(key, value)?;
        }

        jitter_range("typewriter.normal_jitter", self.normal_jitter)?;
        jitter_range("typewriter.degraded_jitter", self.degraded_jitter)?;

        if !(0.0..=1.0).contains(&self.glitch_chance) {
            return Err(ConfigError::Invalid {
                key: "typewriter.glitch_chance",
                reason: format!("{} is not a probability", self.glitch_chance),
            });
        }
        if self.glitch_chars.is_empty() {
            return Err(ConfigError::Invalid {
                key: "typewriter.glitch_chars",
                reason: "alphabet cannot be empty".to_string(),
            });
        }
        if self.max_reveals_per_tick == 0 {
            return Err(ConfigError::Invalid {
                key: "typewriter.max_reveals_per_tick",
                reason: "must allow at least one character per tick".to_string(),
            });
        }
        if !(self.cursor_blink_interval.is_finite() && self.cursor_blink_interval > 0.0) {
            return Err(ConfigError::Invalid {
                key: "typewriter.cursor_blink_interval",
                reason: format!("{} must be positive", self.cursor_blink_interval),
            });
        }
        Ok(())
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            reason: format!("{} must be a non-negative number of seconds", value),
        })
    }
}

fn jitter_range(key: &'static str, [lo, hi]: [f64; 2]) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            reason: format!("[{}, {}] is not an ascending non-negative range", lo, hi),
        })
    }
}
