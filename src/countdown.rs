use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::events::{Event, EventCatalog};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Soonest event strictly after `now`. Ties keep catalog order.
pub fn select_target(catalog: &EventCatalog, now: DateTime<Utc>) -> Option<&Event> {
    catalog
        .events()
        .iter()
        .filter(|event| event.date > now)
        .min_by_key(|event| event.date)
}

/// Time left, reduced to the coarsest non-zero unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Days(i64),
    Hours(i64),
    Minutes(i64),
}

impl Remaining {
    /// `None` once the duration has gone negative.
    pub fn from_duration(distance: Duration) -> Option<Self> {
        let ms = distance.num_milliseconds();
        if ms < 0 {
            return None;
        }
        let days = ms / MS_PER_DAY;
        let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
        let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;

        Some(if days > 0 {
            Remaining::Days(days)
        } else if hours > 0 {
            Remaining::Hours(hours)
        } else {
            Remaining::Minutes(minutes)
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Days(n) => write!(f, "{} days", n),
            Remaining::Hours(n) => write!(f, "{} hours", n),
            Remaining::Minutes(n) => write!(f, "{} minutes", n),
        }
    }
}

/// What the countdown slot should show after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownView {
    Visible(String),
    Hidden,
}

/// Countdown to a single target chosen once at startup.
///
/// Expiry is terminal: after the first negative reading every later tick
/// reports [`CountdownView::Hidden`], whatever the clock says.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    target: Event,
    expired: bool,
}

impl Countdown {
    /// Picks the target, or `None` when nothing is upcoming.
    pub fn start(catalog: &EventCatalog, now: DateTime<Utc>) -> Option<Self> {
        select_target(catalog, now).map(|target| Self {
            target: target.clone(),
            expired: false,
        })
    }

    pub fn target(&self) -> &Event {
        &self.target
    }

    #[cfg(test)]
    fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownView {
        if self.expired {
            return CountdownView::Hidden;
        }
        match Remaining::from_duration(self.target.date - now) {
            Some(remaining) => {
                CountdownView::Visible(format!("{} - {}", self.target.title, remaining))
            }
            None => {
                self.expired = true;
                CountdownView::Hidden
            }
        }
    }
}
