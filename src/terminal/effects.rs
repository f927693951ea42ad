//! Degradation-driven jitter and character corruption.
//!
//! Every random draw goes through the `Rng` handed in by the caller, so a
//! seeded generator makes a whole session reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::TypewriterConfig;
use crate::degradation::DegradationScore;

/// Randomised effects for one terminal, parameterised by its degradation.
#[derive(Debug, Clone)]
pub struct Effects {
    score: DegradationScore,
    normal_jitter: (f64, f64),
    degraded_jitter: (f64, f64),
    pause_duration: f64,
    glitch_threshold: u32,
    glitch_chance: f64,
    alphabet: Vec<char>,
}

impl Effects {
    pub fn new(config: &TypewriterConfig, score: DegradationScore) -> Self {
        let [normal_lo, normal_hi] = config.normal_jitter;
        let [degraded_lo, degraded_hi] = config.degraded_jitter;
        Self {
            score,
            normal_jitter: (normal_lo, normal_hi),
            degraded_jitter: (degraded_lo, degraded_hi),
            pause_duration: config.pause_duration,
            glitch_threshold: config.glitch_threshold,
            glitch_chance: config.glitch_chance.clamp(0.0, 1.0),
            alphabet: config.glitch_chars.chars().collect(),
        }
    }

    pub fn score(&self) -> DegradationScore {
        self.score
    }

    /// Draw a jitter multiplier.
    ///
    /// The degraded range is used with probability `score / 100` (always for
    /// scores of 100 or more, never for a score of zero).
    pub fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (lo, hi) = if rng.gen_bool(self.score.instability()) {
            self.degraded_jitter
        } else {
            self.normal_jitter
        };
        if lo >= hi {
            return lo;
        }
        rng.gen_range(lo..=hi)
    }

    /// Delay before the next character appears.
    pub fn char_delay<R: Rng + ?Sized>(&self, rng: &mut R, base_speed: f64) -> f64 {
        base_speed * self.jitter(rng)
    }

    /// Timer value to resume from after a paused line (always <= 0).
    pub fn pause_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        -(self.pause_duration * (self.jitter(rng) / 2.0))
    }

    /// Whether this terminal is degraded enough to corrupt characters.
    pub fn glitches(&self) -> bool {
        self.score.value() > self.glitch_threshold
    }

    /// Possibly replace `ch` with a random character from the alphabet.
    pub fn corrupt<R: Rng + ?Sized>(&self, rng: &mut R, ch: char) -> char {
        if !self.glitches() || !rng.gen_bool(self.glitch_chance) {
            return ch;
        }
        self.alphabet.choose(rng).copied().unwrap_or(ch)
    }

    /// Corruption for revealed text: spaces always come through intact.
    pub fn corrupt_revealed<R: Rng + ?Sized>(&self, rng: &mut R, ch: char) -> char {
        if ch == ' ' {
            ch
        } else {
            self.corrupt(rng, ch)
        }
    }
}
