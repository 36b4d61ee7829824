//! In-memory idea list

use ideas_core::IdeaRecord;
use rand::Rng;

/// The session's idea list.
///
/// Replaced once when loading finishes; afterwards only grows by prepending
/// custom ideas. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct IdeaStore {
    ideas: Vec<IdeaRecord>,
}

impl IdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ideas(ideas: Vec<IdeaRecord>) -> Self {
        Self { ideas }
    }

    /// Adopt a freshly loaded list
    pub fn replace(&mut self, ideas: Vec<IdeaRecord>) {
        self.ideas = ideas;
    }

    pub fn ideas(&self) -> &[IdeaRecord] {
        &self.ideas
    }

    pub fn get(&self, index: usize) -> Option<&IdeaRecord> {
        self.ideas.get(index)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Uniformly random index in `[0, len)`, `None` when empty
    pub fn random_index<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.ideas.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.ideas.len()))
    }

    /// Uniformly random record. Immediate repeats are allowed.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<&IdeaRecord> {
        self.random_index(rng).map(|i| &self.ideas[i])
    }

    /// Prepend a custom idea built from raw input.
    ///
    /// Returns the new record, or `None` if the input was blank.
    pub fn add_custom(&mut self, raw: &str) -> Option<IdeaRecord> {
        let record = IdeaRecord::custom(raw)?;
        self.ideas.insert(0, record.clone());
        Some(record)
    }
}
