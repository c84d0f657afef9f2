use crate::watch::{OneShotSet, VisibilityEntry, VisibilitySource};

/// Leading integer of `text`, read the way `parseInt` reads it.
/// Anything unreadable counts as zero; digit runs past `i64` saturate.
pub fn parse_target(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match (digits.parse::<i64>(), negative) {
        (Ok(n), true) => -n,
        (Ok(n), false) => n,
        (Err(_), true) => i64::MIN,
        (Err(_), false) => i64::MAX,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Fixed-step count from zero to a target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms as f64 / frame_ms.max(1) as f64).max(1.0);
        Self {
            target,
            current: 0.0,
            increment: target as f64 / frames,
            done: false,
        }
    }

    /// Advances one frame. The last frame always shows the exact target.
    pub fn step(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.done = true;
            }
        }
        let value = if self.done {
            self.target
        } else {
            self.current.floor() as i64
        };
        CounterFrame {
            value,
            done: self.done,
        }
    }
}

/// Tracks which counters have started.
#[derive(Debug, Default)]
pub struct CounterTracker {
    slots: OneShotSet<usize>,
}

impl CounterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: usize) {
        self.slots.register(key);
    }

    pub fn is_counted(&self, key: usize) -> bool {
        self.slots.state(&key).map_or(false, |s| s.has_fired())
    }

    /// Keys that should start counting now, in report order.
    pub fn on_batch<S>(&mut self, entries: &[VisibilityEntry<usize>], source: &S) -> Vec<usize>
    where
        S: VisibilitySource<usize> + ?Sized,
    {
        let mut started = Vec::new();
        for entry in entries.iter().filter(|e| e.intersecting) {
            if self.slots.fire(&entry.key) {
                source.unwatch(&entry.key);
                started.push(entry.key);
            }
        }
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch::tests::RecordingSource;

    fn run(mut animation: CounterAnimation) -> Vec<i64> {
        let mut values = vec![0];
        loop {
            let frame = animation.step();
            values.push(frame.value);
            if frame.done {
                return values;
            }
            assert!(values.len() < 10_000, "animation never finished");
        }
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("250"), 250);
        assert_eq!(parse_target("  42 members"), 42);
        assert_eq!(parse_target("1200+"), 1200);
        assert_eq!(parse_target("-7"), -7);
        assert_eq!(parse_target("+15"), 15);
        assert_eq!(parse_target("many"), 0);
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("-"), 0);
        assert_eq!(parse_target("3.9"), 3);
    }

    #[test]
    fn test_parse_target_saturates() {
        assert_eq!(parse_target("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_target("-99999999999999999999999 fans"), i64::MIN);
        assert_eq!(parse_target("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn test_counts_to_exact_target() {
        let values = run(CounterAnimation::new(250, 2000, 16));
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&250));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 250));
        // 2000ms at 16ms per frame.
        assert_eq!(values.len() - 1, 125);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0, 2000, 16);
        assert_eq!(animation.step(), CounterFrame { value: 0, done: true });
        assert_eq!(animation.step(), CounterFrame { value: 0, done: true });
    }

    #[test]
    fn test_counter_starts_once() {
        let mut tracker = CounterTracker::new();
        tracker.register(0);
        tracker.register(1);
        let source = RecordingSource::default();

        let batch = [VisibilityEntry::new(1, true), VisibilityEntry::new(0, false)];
        assert_eq!(tracker.on_batch(&batch, &source), vec![1]);
        assert_eq!(tracker.on_batch(&batch, &source), Vec::<usize>::new());
        assert!(tracker.is_counted(1));
        assert!(!tracker.is_counted(0));
        assert_eq!(*source.unwatched.borrow(), vec![1]);
    }
}
