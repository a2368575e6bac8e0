// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal preview of a routed board.

use std::fmt;

use super::canvas::WIRE_BRIDGE;
use super::{Canvas, CanvasError, HorizontalLineIndex};
use crate::model::{Board, ElementKind, Point, Wire};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRenderError {
    InvalidCell { cell: i32 },
    Canvas(CanvasError),
}

impl fmt::Display for TextRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCell { cell } => write!(f, "cell size must be positive, got {cell}"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for TextRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCell { .. } => None,
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<CanvasError> for TextRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

pub fn element_glyph(kind: ElementKind) -> char {
    match kind {
        ElementKind::AndGate => '&',
        ElementKind::OrGate => '≥',
        ElementKind::Inverter => '¬',
        ElementKind::CovertGate { .. } => '?',
        ElementKind::Switch => 'S',
        ElementKind::PowerSource => '+',
        ElementKind::LightBulb => '*',
        ElementKind::DangerSign => '!',
        ElementKind::Splitter => '•',
    }
}

/// Maps level coordinates onto character cells `cell` units wide, rounding to the nearest.
#[derive(Debug, Clone, Copy)]
struct CellGrid {
    min_x: i64,
    min_y: i64,
    cell: i64,
}

impl CellGrid {
    fn column(self, x: i32) -> usize {
        to_index(i64::from(x) - self.min_x, self.cell)
    }

    fn row(self, y: i32) -> usize {
        to_index(i64::from(y) - self.min_y, self.cell)
    }
}

fn to_index(offset: i64, cell: i64) -> usize {
    usize::try_from((offset + cell / 2) / cell).unwrap_or(0)
}

/// Draws `wires` with box-drawing characters and every element of `board` as a one-character
/// glyph, one character cell per `cell` level units.
///
/// Wires joining at a shared vertex merge into corners and tees. Where a vertical segment hops
/// over another wire the cell shows `╫` instead of a junction.
pub fn render_wires_unicode(
    board: &Board,
    wires: &[Wire],
    cell: i32,
) -> Result<String, TextRenderError> {
    if cell <= 0 {
        return Err(TextRenderError::InvalidCell { cell });
    }

    let points = board
        .elements()
        .map(|element| element.position())
        .chain(wires.iter().flat_map(|wire| wire.points().iter().copied()))
        .collect::<Vec<Point>>();
    let (Some(min_x), Some(min_y)) =
        (points.iter().map(|p| p.x()).min(), points.iter().map(|p| p.y()).min())
    else {
        return Ok(String::new());
    };
    let max_x = points.iter().map(|p| p.x()).max().unwrap_or(min_x);
    let max_y = points.iter().map(|p| p.y()).max().unwrap_or(min_y);

    let grid =
        CellGrid { min_x: i64::from(min_x), min_y: i64::from(min_y), cell: i64::from(cell) };
    let mut canvas = Canvas::new(grid.column(max_x) + 1, grid.row(max_y) + 1)?;

    let segments = || wires.iter().flat_map(Wire::segments);
    for segment in segments().filter(|segment| segment.is_horizontal()) {
        canvas.draw_hline(
            grid.column(segment.from.x()),
            grid.column(segment.to.x()),
            grid.row(segment.from.y()),
        )?;
    }

    let index = HorizontalLineIndex::build(wires);
    let mut bridges = Vec::new();
    for segment in segments().filter(|segment| segment.is_vertical()) {
        let column = grid.column(segment.from.x());
        canvas.draw_vline(column, grid.row(segment.from.y()), grid.row(segment.to.y()))?;
        for y in index.crossings(segment.from.x(), segment.from.y(), segment.to.y()) {
            bridges.push((column, grid.row(y)));
        }
    }
    for (column, row) in bridges {
        if canvas.has_horizontal_run(column, row)? {
            canvas.set(column, row, WIRE_BRIDGE)?;
        }
    }

    for element in board.elements() {
        let position = element.position();
        let glyph = element_glyph(element.kind());
        canvas.set(grid.column(position.x()), grid.row(position.y()), glyph)?;
    }

    Ok(canvas.to_string())
}
