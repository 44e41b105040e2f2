//! Priority queue of pending actions.

use crate::action::{Action, ActionId};

/// Pending actions ordered by priority, lowest value first.
///
/// Backed by a vector kept sorted on insertion. Equal priorities are served
/// in insertion order, and removing any entry leaves the rest ordered.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    entries: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts behind every entry of equal or higher importance.
    pub fn push(&mut self, action: Action) {
        let priority = action.priority();
        let index = self
            .entries
            .partition_point(|queued| queued.priority() <= priority);
        self.entries.insert(index, action);
    }

    /// Inserts unless an action with the same identity is already queued.
    ///
    /// Returns the rejected action when a duplicate exists.
    pub fn push_unique(&mut self, action: Action) -> Result<(), Action> {
        if self.entries.iter().any(|queued| queued.same_identity(&action)) {
            return Err(action);
        }
        self.push(action);
        Ok(())
    }

    /// The most important entry.
    pub fn peek(&self) -> Option<&Action> {
        self.entries.first()
    }

    /// Removes and returns the most important entry.
    pub fn pop(&mut self) -> Option<Action> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.entries.iter().any(|action| action.id() == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|action| action.name() == name)
    }

    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.entries.iter().find(|action| action.id() == id)
    }

    pub fn get_mut(&mut self, id: ActionId) -> Option<&mut Action> {
        self.entries.iter_mut().find(|action| action.id() == id)
    }

    /// Id of the first entry named `name`, skipping `exclude`.
    pub fn find_by_name(&self, name: &str, exclude: Option<ActionId>) -> Option<ActionId> {
        self.entries
            .iter()
            .find(|action| action.name() == name && Some(action.id()) != exclude)
            .map(Action::id)
    }

    pub fn remove(&mut self, id: ActionId) -> Option<Action> {
        let index = self.entries.iter().position(|action| action.id() == id)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Action> {
        self.entries.iter_mut()
    }
}
