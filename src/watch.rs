use std::collections::HashMap;
use std::hash::Hash;

/// Per-element trigger state. `Fired` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneShot {
    #[default]
    Armed,
    Fired,
}

impl OneShot {
    /// Moves to `Fired`. Returns true only for the first call.
    pub fn fire(&mut self) -> bool {
        match self {
            OneShot::Armed => {
                *self = OneShot::Fired;
                true
            }
            OneShot::Fired => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, OneShot::Fired)
    }
}

/// One element's visibility as reported in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub intersecting: bool,
}

impl<K> VisibilityEntry<K> {
    pub fn new(key: K, intersecting: bool) -> Self {
        Self { key, intersecting }
    }
}

/// Whatever is watching elements for us.
pub trait VisibilitySource<K> {
    fn unwatch(&self, key: &K);
}

/// Set of one-shot triggers keyed by element.
#[derive(Debug, Clone)]
pub struct OneShotSet<K> {
    slots: HashMap<K, OneShot>,
}

impl<K: Eq + Hash> Default for OneShotSet<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> OneShotSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `key`. Re-registering an element keeps its current state.
    pub fn register(&mut self, key: K) {
        self.slots.entry(key).or_default();
    }

    /// Fires `key` if it is registered and still armed.
    pub fn fire(&mut self, key: &K) -> bool {
        self.slots.get_mut(key).map_or(false, OneShot::fire)
    }

    pub fn state(&self, key: &K) -> Option<OneShot> {
        self.slots.get(key).copied()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    fn fired_count(&self) -> usize {
        self.slots.values().filter(|s| s.has_fired()).count()
    }
}
