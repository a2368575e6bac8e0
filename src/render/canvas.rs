// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

pub const WIRE_HORIZONTAL: char = '─';
pub const WIRE_VERTICAL: char = '│';
/// A vertical wire passing over a horizontal one without connecting.
pub const WIRE_BRIDGE: char = '╫';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Edges(u8);

impl Edges {
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn to_char(self) -> char {
        match self.0 {
            0 => ' ',
            1..=3 => WIRE_HORIZONTAL,
            4 | 8 | 12 => WIRE_VERTICAL,
            10 => '┌',
            9 => '┐',
            6 => '└',
            5 => '┘',
            14 => '├',
            13 => '┤',
            11 => '┬',
            7 => '┴',
            _ => '┼',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Glyph(char),
    Wire(Edges),
}

/// A fixed-size, bounds-checked character grid for wire previews.
///
/// Wire runs record which neighbours they connect to, so runs meeting in a cell render as a
/// corner, tee or junction. Glyphs overwrite whatever is below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![Cell::Glyph(' '); len] })
    }

    /// Places a glyph at `(x, y)`, replacing any wire there.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = Cell::Glyph(ch);
        Ok(())
    }

    /// Draws a horizontal wire run from `x0` to `x1` (either order) on row `y`.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (low, high) = (x0.min(x1), x0.max(x1));
        self.index_of(low, y)?;
        self.index_of(high, y)?;
        for x in low..=high {
            let mut edges = Edges::default();
            if x > low {
                edges = edges.union(Edges::LEFT);
            }
            if x < high {
                edges = edges.union(Edges::RIGHT);
            }
            self.merge(x, y, edges)?;
        }
        Ok(())
    }

    /// Draws a vertical wire run from `y0` to `y1` (either order) in column `x`.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (low, high) = (y0.min(y1), y0.max(y1));
        self.index_of(x, low)?;
        self.index_of(x, high)?;
        for y in low..=high {
            let mut edges = Edges::default();
            if y > low {
                edges = edges.union(Edges::UP);
            }
            if y < high {
                edges = edges.union(Edges::DOWN);
            }
            self.merge(x, y, edges)?;
        }
        Ok(())
    }

    fn merge(&mut self, x: usize, y: usize, edges: Edges) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = match self.cells[idx] {
            Cell::Wire(existing) => Cell::Wire(existing.union(edges)),
            Cell::Glyph(_) if edges == Edges::default() => Cell::Wire(Edges::LEFT),
            Cell::Glyph(_) => Cell::Wire(edges),
        };
        Ok(())
    }

    /// `true` if a wire run passes straight through `(x, y)` horizontally.
    pub fn has_horizontal_run(&self, x: usize, y: usize) -> Result<bool, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(matches!(
            self.cells[idx],
            Cell::Wire(edges) if edges.contains(Edges::LEFT) && edges.contains(Edges::RIGHT)
        ))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}

/// Rows joined by `\n`, trailing blanks and empty trailing rows removed.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = Vec::with_capacity(self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row
                .iter()
                .map(|cell| match *cell {
                    Cell::Glyph(ch) => ch,
                    Cell::Wire(edges) => edges.to_char(),
                })
                .collect::<String>();
            rows.push(line.trim_end().to_owned());
        }
        while matches!(rows.last(), Some(row) if row.is_empty()) {
            rows.pop();
        }
        f.write_str(&rows.join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
