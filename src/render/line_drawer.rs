// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::{Color, DrawCommands, DrawPrimitive, Hop, RenderOptions, Stroke};
use crate::model::{Board, ElementId, Point, Segment, Wire};

/// Crossing ys of one vertical segment; rarely more than a handful.
pub type Crossings = SmallVec<[i32; 4]>;

/// Horizontal wire segments keyed by their y coordinate.
///
/// Spans keep their original direction; containment checks normalize them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorizontalLineIndex {
    spans: BTreeMap<i32, Vec<(i32, i32)>>,
}

impl HorizontalLineIndex {
    pub fn build(wires: &[Wire]) -> Self {
        let mut spans = BTreeMap::<i32, Vec<(i32, i32)>>::new();
        for segment in wires.iter().flat_map(Wire::segments) {
            if segment.is_horizontal() {
                spans
                    .entry(segment.from.y())
                    .or_default()
                    .push((segment.from.x(), segment.to.x()));
            }
        }
        Self { spans }
    }

    /// Ys where a vertical line at `x` between `y1` and `y2` crosses a horizontal span.
    ///
    /// Both intervals are open, so touching an endpoint is never a crossing. The result is
    /// ascending and free of duplicates.
    pub fn crossings(&self, x: i32, y1: i32, y2: i32) -> Crossings {
        let (low, high) = (y1.min(y2), y1.max(y2));
        let mut found = Crossings::new();
        if i64::from(high) - i64::from(low) < 2 {
            return found;
        }
        for (&y, spans) in self.spans.range(low + 1..high) {
            if spans.iter().any(|&(x1, x2)| x1.min(x2) < x && x < x1.max(x2)) {
                found.push(y);
            }
        }
        found
    }
}

/// Turns routed wires into [`DrawCommands`].
#[derive(Debug, Clone, Default)]
pub struct LineDrawer {
    options: RenderOptions,
}

impl LineDrawer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Draws `wires` as strokes, bridging every vertical segment over the horizontal segments it
    /// crosses.
    ///
    /// With `power_visible` each wire takes the palette's on or off color from its origin's
    /// output state; otherwise every wire is drawn off.
    pub fn draw(&self, board: &Board, wires: &[Wire], power_visible: bool) -> DrawCommands {
        let index = HorizontalLineIndex::build(wires);
        let mut commands =
            DrawCommands { line_width: self.options.line_width, primitives: Vec::new() };

        for (wire_index, wire) in wires.iter().enumerate() {
            let color = self.wire_color(board, wire, power_visible);
            let pen = Pen {
                wire: wire_index,
                origin: wire.origin(),
                color,
                radius: self.options.hop_radius,
            };
            for segment in wire.segments().filter(|segment| !segment.is_degenerate()) {
                if segment.is_vertical() {
                    let crossings =
                        index.crossings(segment.from.x(), segment.from.y(), segment.to.y());
                    pen.bridged(segment, &crossings, &mut commands.primitives);
                } else {
                    commands.primitives.push(pen.stroke(segment.from, segment.to));
                }
            }
        }

        log::debug!(
            "drew {} wires: {} primitives, {} hops",
            wires.len(),
            commands.primitives.len(),
            commands.hops().count()
        );
        commands
    }

    fn wire_color(&self, board: &Board, wire: &Wire, power_visible: bool) -> Color {
        let palette = self.options.palette;
        if !power_visible {
            return palette.off();
        }
        match board.element(wire.origin()) {
            Some(origin) if origin.output_state() => palette.on(),
            Some(_) => palette.off(),
            None => {
                log::warn!(
                    "wire origin {} is not on the board, drawing it unpowered",
                    wire.origin()
                );
                palette.off()
            }
        }
    }
}

struct Pen {
    wire: usize,
    origin: ElementId,
    color: Color,
    radius: i32,
}

impl Pen {
    fn stroke(&self, from: Point, to: Point) -> DrawPrimitive {
        DrawPrimitive::Stroke(Stroke {
            wire: self.wire,
            origin: self.origin,
            from,
            to,
            color: self.color,
        })
    }

    /// Emits the hops of a vertical segment, then its stroke split around each of them.
    fn bridged(&self, segment: Segment, crossings: &[i32], out: &mut Vec<DrawPrimitive>) {
        let x = segment.from.x();
        for &y in crossings {
            out.push(DrawPrimitive::Hop(Hop {
                wire: self.wire,
                center: Point::new(x, y),
                radius: self.radius,
                color: self.color,
            }));
        }

        let (start, end) = (segment.from.y(), segment.to.y());
        let dir: i32 = if end > start { 1 } else { -1 };
        let ahead = |a: i32, b: i32| (i64::from(b) - i64::from(a)) * i64::from(dir) > 0;
        let reach = self.radius.saturating_mul(dir);

        let mut cursor = start;
        let ordered: Crossings = if dir > 0 {
            crossings.iter().copied().collect()
        } else {
            crossings.iter().rev().copied().collect()
        };
        for y in ordered {
            let stop = y.saturating_sub(reach);
            // Crossings closer together than two radii leave nothing to draw between them.
            if ahead(cursor, stop) {
                out.push(self.stroke(Point::new(x, cursor), Point::new(x, stop)));
            }
            cursor = y.saturating_add(reach);
        }
        if ahead(cursor, end) {
            out.push(self.stroke(Point::new(x, cursor), Point::new(x, end)));
        }
    }
}

#[cfg(test)]
mod tests;
