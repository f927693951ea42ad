//! System degradation model.
//!
//! A terminal's hardware is described by three integrity percentages. They
//! are folded into a single degradation score that the typewriter engine
//! uses to decide how often character delays jitter into the degraded range
//! and whether revealed characters may be corrupted.
//!
//! The score is a weighted sum of each component's deficit (`100 - value`)
//! plus a non-linear penalty for every component below [`CRITICAL_THRESHOLD`].
//! All arithmetic is done in integer hundredths so that results are exact
//! and halves round away from zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TerminalError;

/// Weight of the CPU deficit, in hundredths.
pub const CPU_WEIGHT: u32 = 45;
/// Weight of the memory deficit, in hundredths.
pub const MEMORY_WEIGHT: u32 = 35;
/// Weight of the storage deficit, in hundredths.
pub const STORAGE_WEIGHT: u32 = 20;

/// Components below this integrity incur the critical penalty.
pub const CRITICAL_THRESHOLD: u8 = 30;
/// Critical penalty per point below the threshold, in hundredths (1.8).
pub const CRITICAL_MULTIPLIER: u32 = 180;

/// Integrity of a terminal's hardware components, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentIntegrity {
    cpu: u8,
    memory: u8,
    storage: u8,
}

impl ComponentIntegrity {
    /// Build an integrity set, rejecting any value outside `0..=100`.
    pub fn new(cpu: i64, memory: i64, storage: i64) -> Result<Self, TerminalError> {
        Ok(Self {
            cpu: percentage("cpu", cpu)?,
            memory: percentage("memory", memory)?,
            storage: percentage("storage", storage)?,
        })
    }

    /// A fully intact terminal.
    pub fn pristine() -> Self {
        Self {
            cpu: 100,
            memory: 100,
            storage: 100,
        }
    }

    pub fn cpu(&self) -> u8 {
        self.cpu
    }

    pub fn memory(&self) -> u8 {
        self.memory
    }

    pub fn storage(&self) -> u8 {
        self.storage
    }

    /// Components paired with their weights, in a fixed order.
    fn weighted(&self) -> [(u8, u32); 3] {
        [
            (self.cpu, CPU_WEIGHT),
            (self.memory, MEMORY_WEIGHT),
            (self.storage, STORAGE_WEIGHT),
        ]
    }
}

impl fmt::Display for ComponentIntegrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}%   Memory: {}%   Storage: {}%",
            self.cpu, self.memory, self.storage
        )
    }
}

/// Raw integrity values as they appear in configuration files.
///
/// Every component is optional here so that a missing key surfaces as
/// [`TerminalError::InvalidIntegrity`] instead of a generic parse error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegritySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<i64>,
}

impl IntegritySpec {
    pub fn new(cpu: i64, memory: i64, storage: i64) -> Self {
        Self {
            cpu: Some(cpu),
            memory: Some(memory),
            storage: Some(storage),
        }
    }
}

impl TryFrom<IntegritySpec> for ComponentIntegrity {
    type Error = TerminalError;

    fn try_from(spec: IntegritySpec) -> Result<Self, Self::Error> {
        let cpu = spec.cpu.ok_or_else(|| TerminalError::missing("cpu"))?;
        let memory = spec.memory.ok_or_else(|| TerminalError::missing("memory"))?;
        let storage = spec
            .storage
            .ok_or_else(|| TerminalError::missing("storage"))?;
        Self::new(cpu, memory, storage)
    }
}

fn percentage(component: &'static str, value: i64) -> Result<u8, TerminalError> {
    if (0..=100).contains(&value) {
        Ok(value as u8)
    } else {
        Err(TerminalError::out_of_range(component, value))
    }
}

/// Scalar instability of a terminal. Zero means fully healthy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DegradationScore(u32);

impl DegradationScore {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Probability that a delay is drawn from the degraded jitter range.
    ///
    /// Scores of 100 and above always take the degraded branch.
    pub fn instability(&self) -> f64 {
        (self.0 as f64 / 100.0).min(1.0)
    }
}

impl fmt::Display for DegradationScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the degradation score for a set of component integrities.
///
/// Pure and total: every valid [`ComponentIntegrity`] maps to a score.
pub fn compute_degradation(integrity: &ComponentIntegrity) -> DegradationScore {
    let hundredths: u32 = integrity
        .weighted()
        .iter()
        .map(|&(value, weight)| {
            let deficit = u32::from(100 - value);
            let base = deficit * weight;
            let penalty = if value < CRITICAL_THRESHOLD {
                u32::from(CRITICAL_THRESHOLD - value) * CRITICAL_MULTIPLIER
            } else {
                0
            };
            base + penalty
        })
        .sum();

    // Round half away from zero; the total is never negative.
    DegradationScore((hundredths + 50) / 100)
}
