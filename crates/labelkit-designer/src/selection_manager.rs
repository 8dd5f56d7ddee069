use labelkit_core::ElementId;

/// Manages element selection and the alignment anchor.
///
/// `SelectionManager` is responsible for:
/// - Tracking which elements are selected
/// - Tracking the **anchor**: the most recently added element that is still selected
/// - Plain activation (replace the selection) and modifier activation (toggle)
///
/// # Selection Model
///
/// Members are kept in the order they were added. The anchor is always the
/// last member, so removing the anchor hands the role to the member added
/// just before it, and emptying the selection clears it.
///
/// The selection is transient editor state; it is never persisted and is
/// cleared whenever undo/redo swaps the element list underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    /// Selected ids, oldest first
    members: Vec<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.anchor(), None);
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Returns the anchor element id.
    ///
    /// # Returns
    ///
    /// `Some(id)` if anything is selected, `None` otherwise.
    pub fn anchor(&self) -> Option<ElementId> {
        self.members.last().copied()
    }

    /// Selected ids, in the order they were added.
    pub fn ids(&self) -> &[ElementId] {
        &self.members
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The only selected id, if exactly one element is selected.
    pub fn single(&self) -> Option<ElementId> {
        match self.members.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Makes `id` the sole selected element and the anchor.
    pub fn select_only(&mut self, id: ElementId) {
        self.members.clear();
        self.members.push(id);
    }

    /// Adds `id` to the selection and makes it the anchor.
    ///
    /// Re-adding a member moves it to the anchor position.
    pub fn add(&mut self, id: ElementId) {
        self.members.retain(|m| *m != id);
        self.members.push(id);
    }

    /// Removes `id` from the selection.
    ///
    /// # Returns
    ///
    /// `true` if `id` was selected.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| *m != id);
        self.members.len() != before
    }

    /// Toggles membership of `id` (modifier-click behaviour).
    ///
    /// # Arguments
    ///
    /// * `id` - The element that was activated
    ///
    /// # Returns
    ///
    /// `true` if `id` is selected afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelkit_designer::selection_manager::SelectionManager;
    ///
    /// let mut manager = SelectionManager::new();
    /// manager.toggle(1);
    /// manager.toggle(2);
    /// assert_eq!(manager.anchor(), Some(2));
    ///
    /// manager.toggle(2);
    /// assert_eq!(manager.anchor(), Some(1));
    /// ```
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.members.push(id);
            true
        }
    }

    /// Replaces the selection with `ids`; the last one becomes the anchor.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.members.clear();
        for id in ids {
            self.add(id);
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.members.clear();
    }
}
