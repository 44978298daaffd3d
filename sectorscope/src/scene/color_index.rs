//! Name-to-primitive index for recolorable buffers.
//!
//! Sector files attach a color *name* ("RWY", "TAXI", "SID", ...) to every
//! line they define. Storing that string per segment would be wasteful, and
//! the renderer wants a flat RGB buffer anyway. [`ColorBufferIndex`] keeps a
//! small integer per primitive instead, so that when the user redefines a
//! color every primitive drawn with it can be found and rewritten.

use std::collections::HashMap;

/// Maps color names to the primitives registered under them.
///
/// Primitives have no identity besides their registration order: the i-th
/// call to [`add`](Self::add) describes primitive `i`. Callers must
/// register exactly one name per primitive, in creation order.
#[derive(Debug, Clone, Default)]
pub struct ColorBufferIndex {
    /// Dense identifiers, starting at 1, in first-seen order.
    ids_by_name: HashMap<String, u32>,
    /// One identifier per registered primitive.
    ids: Vec<u32>,
}

impl ColorBufferIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next primitive under `name`.
    pub fn add(&mut self, name: &str) {
        let id = match self.ids_by_name.get(name) {
            Some(&id) => id,
            None => {
                let id = self.ids_by_name.len() as u32 + 1;
                self.ids_by_name.insert(name.to_string(), id);
                id
            }
        };
        self.ids.push(id);
    }

    /// Call `callback` with the position of every primitive registered
    /// under `name`, in ascending order. Unknown names are a no-op.
    ///
    /// This is a linear scan over all primitives; recoloring is rare.
    pub fn visit<F>(&self, name: &str, mut callback: F)
    where
        F: FnMut(usize),
    {
        let Some(&target) = self.ids_by_name.get(name) else {
            return;
        };
        for (i, &id) in self.ids.iter().enumerate() {
            if id == target {
                callback(i);
            }
        }
    }

    /// Positions registered under `name`, ascending.
    pub fn positions(&self, name: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        self.visit(name, |i| positions.push(i));
        positions
    }

    /// Identifier assigned to `name`, if it has been seen.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.ids_by_name.get(name).copied()
    }

    /// True if at least one primitive was registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.ids_by_name.contains_key(name)
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Distinct names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ids_by_name.keys().map(String::as_str)
    }
}
