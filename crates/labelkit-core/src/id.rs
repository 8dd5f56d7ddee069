//! Element id generation.

/// Identifier of an element within a layout.
pub type ElementId = u64;

/// Monotonic element id source, one per designer session.
///
/// Ids are unique for the lifetime of the generator. A generator seeded from a
/// loaded layout starts above the highest id already in use, so newly added
/// elements never collide with persisted ones.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_id: ElementId,
}

impl IdGenerator {
    /// Creates a generator whose first id is 1.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Creates a generator that will not hand out any of `existing`.
    pub fn after<I: IntoIterator<Item = ElementId>>(existing: I) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self {
            next_id: max.saturating_add(1),
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.generate_id(), 1);
        assert_eq!(ids.generate_id(), 2);
        assert_eq!(ids.generate_id(), 3);
    }

    #[test]
    fn test_after_skips_existing() {
        let mut ids = IdGenerator::after([4, 17, 9]);
        assert_eq!(ids.generate_id(), 18);

        let mut empty = IdGenerator::after(std::iter::empty());
        assert_eq!(empty.generate_id(), 1);
    }
}
