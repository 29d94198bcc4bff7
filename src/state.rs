//! Local view state for the services section.
//!
//! Plain owned structs with explicit update methods. The section wraps
//! them in signals and calls these from its own event handlers, so all
//! transitions run sequentially on the UI thread.

use std::collections::BTreeSet;

/// Ids of cards that have entered the viewport at least once.
///
/// Membership only grows for the mounted lifetime: the reveal is a
/// one-time entrance effect, so a card never un-reveals when scrolled
/// away and back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevealSet {
    ids: BTreeSet<u32>,
}

impl RevealSet {
    /// Mark a card as seen. Returns whether the id was newly added;
    /// re-reporting an already revealed card is a no-op.
    pub fn reveal(&mut self, id: u32) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The card currently under the pointer, if any. At most one at a
/// time: entering a card replaces the previous value, leaving clears
/// it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    current: Option<u32>,
}

impl Hover {
    pub fn enter(&mut self, id: u32) {
        self.current = Some(id);
    }

    pub fn leave(&mut self) {
        self.current = None;
    }

    pub fn is(&self, id: u32) -> bool {
        self.current == Some(id)
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }
}
