//! Patches — the shape primitives drawn on a canvas.

use crate::types::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a patch added to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchId(pub Uuid);

impl PatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID derived from a seed (for reproducible renders).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(0x666f_726d_6963_6170, seed))
    }
}

impl Default for PatchId {
    fn default() -> Self {
        Self::new()
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, as used by SVG and CSS.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub id: PatchId,
    pub origin: Position,
    pub width: f64,
    pub height: f64,
    pub linewidth: f64,
    pub edge_color: Color,
    pub face_color: Color,
    pub fill: bool,
}

impl Patch {
    /// A filled, black-edged rectangle with a fresh ID.
    pub fn rectangle(origin: Position, width: f64, height: f64) -> Self {
        Self {
            id: PatchId::new(),
            origin,
            width,
            height,
            linewidth: 1.0,
            edge_color: Color::BLACK,
            face_color: Color::BLACK,
            fill: true,
        }
    }

    pub fn with_id(mut self, id: PatchId) -> Self {
        self.id = id;
        self
    }

    pub fn with_linewidth(mut self, linewidth: f64) -> Self {
        self.linewidth = linewidth;
        self
    }

    pub fn with_edge_color(mut self, color: Color) -> Self {
        self.edge_color = color;
        self
    }

    pub fn with_face_color(mut self, color: Color) -> Self {
        self.face_color = color;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}
