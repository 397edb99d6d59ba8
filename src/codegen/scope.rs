//! The scope stack used for symbol resolution during lowering.
//!
//! This module defines [`ScopeStack`], a stack of name-keyed frames. The
//! frame at index 0 is the global scope and exists for the lifetime of
//! the stack; function bodies and blocks push and pop frames above it.

use std::collections::HashMap;

use super::binding::Binding;

/// A stack of scope frames mapping names to [`Binding`]s.
///
/// `declare` inserts into the innermost frame with last-writer-wins
/// semantics, so redeclaring a name within one scope shadows the earlier
/// binding. `lookup` searches from the innermost frame outward and
/// returns the nearest binding.
pub(super) struct ScopeStack<'ctx> {
    /// The frames, outermost first. Index 0 is the global scope.
    frames: Vec<HashMap<String, Binding<'ctx>>>,
}

impl<'ctx> ScopeStack<'ctx> {
    /// Creates a scope stack holding only the global frame.
    pub(super) fn new() -> Self {
        ScopeStack {
            frames: vec![HashMap::new()],
        }
    }

    /// Pushes a fresh innermost frame.
    pub(super) fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pops the innermost frame.
    ///
    /// The global frame is never popped; a mismatched pop is a no-op.
    pub(super) fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Binds `name` in the innermost frame, overwriting any existing
    /// binding there.
    pub(super) fn declare(&mut self, name: &str, binding: Binding<'ctx>) {
        // `new` creates the global frame and `pop` never removes it, so a
        // frame is always present.
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), binding);
        }
    }

    /// Finds the nearest binding for `name`, searching innermost frames
    /// first.
    pub(super) fn lookup(&self, name: &str) -> Option<&Binding<'ctx>> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}
