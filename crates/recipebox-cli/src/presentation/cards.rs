use recipebox_types::RecipeId;
use std::collections::BTreeSet;

/// Per-card "view details" toggles.
///
/// Local to one presentation session; never shared with the store.
#[derive(Debug, Default, Clone)]
pub struct CardStates {
    expanded: BTreeSet<RecipeId>,
    expand_all: bool,
}

impl CardStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_expanded() -> Self {
        Self {
            expanded: BTreeSet::new(),
            expand_all: true,
        }
    }

    /// Flip the details toggle of one card; returns whether it is now open.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: RecipeId) -> bool {
        self.expand_all || self.expanded.contains(&id)
    }
}
