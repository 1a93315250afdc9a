//! PatchCanvas — an in-memory plotting surface.
//!
//! Patches are kept in insertion order so that later patches draw on top
//! of earlier ones when the canvas is rendered.

use formica_core::environment::Canvas;
use formica_core::patch::{Patch, PatchId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PatchCanvas {
    patches: Vec<Patch>,
    index: HashMap<PatchId, usize>,
}

impl PatchCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every patch from the surface.
    pub fn clear(&mut self) {
        self.patches.clear();
        self.index.clear();
    }
}

impl Canvas for PatchCanvas {
    fn add_patch(&mut self, patch: Patch) -> PatchId {
        let id = patch.id;
        self.index.insert(id, self.patches.len());
        self.patches.push(patch);
        id
    }

    fn patch(&self, id: &PatchId) -> Option<&Patch> {
        self.index.get(id).map(|&i| &self.patches[i])
    }

    fn patches(&self) -> Vec<&Patch> {
        self.patches.iter().collect()
    }

    fn patch_count(&self) -> usize {
        self.patches.len()
    }
}
