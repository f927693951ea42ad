//! Ship mission clock.
//!
//! The ship keeps its own time: the mission started 150 years after the
//! crew's departure date and advances with every frame. Terminals print it
//! during boot.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Seconds in 150 Julian years.
const MISSION_OFFSET_SECS: i64 = (365.25 * 150.0 * 86_400.0) as i64;

/// Source of the formatted timestamp printed by boot scripts.
pub trait TimestampProvider {
    fn timestamp(&self) -> String;
}

/// Elapsed mission time on top of a fixed start date.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipClock {
    mission_start: NaiveDateTime,
    elapsed: f64,
}

/// A clock shared between the frame loop and the terminals reading it.
pub type SharedClock = Rc<RefCell<ShipClock>>;

impl ShipClock {
    pub fn new(mission_start: NaiveDateTime) -> Self {
        Self {
            mission_start,
            elapsed: 0.0,
        }
    }

    /// Mission start: 17 Dec 2025 plus 150 years.
    pub fn default_mission_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 17)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
            + TimeDelta::seconds(MISSION_OFFSET_SECS)
    }

    pub fn shared(self) -> SharedClock {
        Rc::new(RefCell::new(self))
    }

    /// Add frame time. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, delta_time: f64) {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.elapsed += delta_time;
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current ship time. Saturates at the last representable instant.
    pub fn now(&self) -> NaiveDateTime {
        TimeDelta::try_milliseconds((self.elapsed * 1000.0) as i64)
            .and_then(|offset| self.mission_start.checked_add_signed(offset))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// `DD MON YYYY  SHIP TIME: HH:MM:SS`
    pub fn timestamp(&self) -> String {
        let now = self.now();
        let earth_date = now.format("%d %b %Y").to_string().to_uppercase();
        let ship_time = now.format("%H:%M:%S");
        format!("{}  SHIP TIME: {}", earth_date, ship_time)
    }
}

impl Default for ShipClock {
    fn default() -> Self {
        Self::new(Self::default_mission_start())
    }
}

impl TimestampProvider for ShipClock {
    fn timestamp(&self) -> String {
        ShipClock::timestamp(self)
    }
}

impl<T: TimestampProvider> TimestampProvider for Rc<RefCell<T>> {
    fn timestamp(&self) -> String {
        self.borrow().timestamp()
    }
}
