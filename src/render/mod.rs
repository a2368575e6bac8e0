// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing routed wires.
//!
//! [`LineDrawer`] turns wires into renderer-agnostic [`DrawCommands`]: straight strokes plus a
//! small hop glyph wherever a vertical segment crosses another wire's horizontal segment. The
//! [`svg`] and [`text`] modules turn those into files and terminal previews.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::model::{ElementId, Point};

mod canvas;
pub mod line_drawer;
pub mod overlay;
pub mod svg;
pub mod text;

pub use canvas::{Canvas, CanvasError};
pub use line_drawer::{HorizontalLineIndex, LineDrawer};
pub use overlay::{length_labels, LengthLabel};
pub use svg::to_svg;
pub use text::{render_wires_unicode, TextRenderError};

/// A 24 bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Wire colors for the board background in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    Dark,
    Bright,
}

impl Palette {
    /// Color of a wire whose origin currently outputs a signal.
    pub fn on(self) -> Color {
        match self {
            Self::Dark => Color(0xffff00),
            Self::Bright => Color(0xaacc00),
        }
    }

    pub fn off(self) -> Color {
        match self {
            Self::Dark => Color(0xaaaaaa),
            Self::Bright => Color(0x333333),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Half the gap a vertical stroke leaves around a crossing.
    pub hop_radius: i32,
    pub line_width: f32,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { hop_radius: 15, line_width: 2.0, palette: Palette::Dark }
    }
}

impl RenderOptions {
    /// Options for a board drawn at `factor` times its level size.
    pub fn scaled(self, factor: f32) -> Self {
        Self { line_width: self.line_width * factor, ..self }
    }
}

/// A straight piece of a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stroke {
    /// Index of the wire in the slice passed to [`LineDrawer::draw`].
    pub wire: usize,
    pub origin: ElementId,
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// Half-ellipse bridge drawn where a vertical stroke passes over a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub wire: usize,
    pub center: Point,
    pub radius: i32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Stroke(Stroke),
    Hop(Hop),
}

/// Everything needed to paint one frame of wires, in paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DrawCommands {
    pub line_width: f32,
    pub primitives: Vec<DrawPrimitive>,
}

impl DrawCommands {
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Stroke(stroke) => Some(stroke),
            DrawPrimitive::Hop(_) => None,
        })
    }

    pub fn hops(&self) -> impl Iterator<Item = &Hop> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Hop(hop) => Some(hop),
            DrawPrimitive::Stroke(_) => None,
        })
    }

    /// Crossing points, one per hop.
    pub fn crossings(&self) -> Vec<Point> {
        self.hops().map(|hop| hop.center).collect()
    }
}
