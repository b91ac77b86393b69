//! Selection routing - which panels a selector's completion triggers

use crate::manager::UIElementHandle;
use std::collections::{BTreeMap, BTreeSet};

/// Binding table from selector handles to the panels they trigger.
///
/// Neither the selector nor the panel knows about the other; the manager asks
/// the router where each selection edge should go.
#[derive(Debug, Clone, Default)]
pub struct SelectionRouter {
    bindings: BTreeMap<UIElementHandle, BTreeSet<UIElementHandle>>,
}

impl SelectionRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `selector` completions to `target`. Returns false if already bound.
    pub fn bind(&mut self, selector: UIElementHandle, target: UIElementHandle) -> bool {
        self.bindings.entry(selector).or_default().insert(target)
    }

    /// Remove one binding. Returns true if it existed.
    pub fn unbind(&mut self, selector: UIElementHandle, target: UIElementHandle) -> bool {
        let Some(targets) = self.bindings.get_mut(&selector) else {
            return false;
        };
        let removed = targets.remove(&target);
        if targets.is_empty() {
            self.bindings.remove(&selector);
        }
        removed
    }

    /// Drop every binding that mentions `handle` on either side.
    pub fn forget(&mut self, handle: UIElementHandle) {
        self.bindings.remove(&handle);
        self.bindings.retain(|_, targets| {
            targets.remove(&handle);
            !targets.is_empty()
        });
    }

    /// Targets bound to `selector`, in ascending handle order.
    pub fn targets(&self, selector: UIElementHandle) -> impl Iterator<Item = UIElementHandle> + '_ {
        self.bindings
            .get(&selector)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Number of selectors with at least one binding.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
