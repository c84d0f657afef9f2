use crate::watch::{OneShot, OneShotSet, VisibilityEntry, VisibilitySource};

/// Style pairs applied before and after the reveal.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(40px) scale(0.95)"),
    (
        "transition",
        "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)",
    ),
];
pub const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0) scale(1)")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub key: usize,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct RevealTracker {
    slots: OneShotSet<usize>,
    stagger_ms: u32,
}

impl RevealTracker {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            slots: OneShotSet::new(),
            stagger_ms,
        }
    }

    pub fn register(&mut self, key: usize) {
        self.slots.register(key);
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.slots
            .state(&key)
            .map_or(false, |state| state == OneShot::Fired)
    }

    /// Handles one observer batch.
    ///
    /// The delay comes from the entry's position in the batch as reported,
    /// counting entries that are not intersecting. Every element that fires is
    /// unwatched right away.
    pub fn on_batch<S>(&mut self, entries: &[VisibilityEntry<usize>], source: &S) -> Vec<ScheduledReveal>
    where
        S: VisibilitySource<usize> + ?Sized,
    {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.intersecting)
            .filter_map(|(index, entry)| {
                if !self.slots.fire(&entry.key) {
                    return None;
                }
                source.unwatch(&entry.key);
                Some(ScheduledReveal {
                    key: entry.key,
                    delay_ms: index as u32 * self.stagger_ms,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch::tests::RecordingSource;

    fn tracker(keys: &[usize]) -> RevealTracker {
        let mut tracker = RevealTracker::new(100);
        for &key in keys {
            tracker.register(key);
        }
        tracker
    }

    #[test]
    fn test_batch_stagger_follows_report_order() {
        let mut tracker = tracker(&[10, 11, 12]);
        let source = RecordingSource::default();
        // Reported C, A, B regardless of document order.
        let batch = [
            VisibilityEntry::new(12, true),
            VisibilityEntry::new(10, true),
            VisibilityEntry::new(11, true),
        ];
        let scheduled = tracker.on_batch(&batch, &source);
        assert_eq!(
            scheduled,
            vec![
                ScheduledReveal { key: 12, delay_ms: 0 },
                ScheduledReveal { key: 10, delay_ms: 100 },
                ScheduledReveal { key: 11, delay_ms: 200 },
            ]
        );
        assert_eq!(*source.unwatched.borrow(), vec![12, 10, 11]);
    }

    #[test]
    fn test_non_intersecting_entries_still_count_for_position() {
        let mut tracker = tracker(&[1, 2, 3]);
        let source = RecordingSource::default();
        let batch = [
            VisibilityEntry::new(1, false),
            VisibilityEntry::new(2, true),
            VisibilityEntry::new(3, true),
        ];
        let delays: Vec<u32> = tracker
            .on_batch(&batch, &source)
            .iter()
            .map(|r| r.delay_ms)
            .collect();
        assert_eq!(delays, vec![100, 200]);
        assert!(!tracker.is_revealed(1));
        assert_eq!(*source.unwatched.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_reveal_happens_once() {
        let mut tracker = tracker(&[5]);
        let source = RecordingSource::default();
        let entering = [VisibilityEntry::new(5, true)];

        assert_eq!(tracker.on_batch(&entering, &source).len(), 1);
        assert!(tracker.is_revealed(5));
        for _ in 0..3 {
            assert!(tracker.on_batch(&[VisibilityEntry::new(5, false)], &source).is_empty());
            assert!(tracker.on_batch(&entering, &source).is_empty());
        }
        assert_eq!(source.unwatched.borrow().len(), 1);
    }

    #[test]
    fn test_unregistered_entries_ignored() {
        let mut tracker = tracker(&[1]);
        let source = RecordingSource::default();
        assert!(tracker.on_batch(&[VisibilityEntry::new(9, true)], &source).is_empty());
        assert!(source.unwatched.borrow().is_empty());
    }
}
