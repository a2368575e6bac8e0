// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use super::geometry::Point;
use super::ids::ElementId;

/// A routed wire: an axis-aligned polyline from a source's output port to a target's input port.
///
/// Wires are built by the router and are read-only afterwards. `origin` names the element whose
/// output the wire carries; renderers use it to look up the signal for coloring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wire {
    origin: ElementId,
    points: Vec<Point>,
}

impl Wire {
    pub(crate) fn new(origin: ElementId) -> Self {
        Self { origin, points: Vec::new() }
    }

    /// Builds a wire from an existing vertex list, e.g. one restored from a previous layout.
    ///
    /// Consecutive points must share an axis; repeated points are accepted and add no length.
    pub fn from_points(origin: ElementId, points: Vec<Point>) -> Result<Self, WireError> {
        if points.len() < 2 {
            return Err(WireError::TooFewPoints { len: points.len() });
        }
        for (index, pair) in points.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if from.x() != to.x() && from.y() != to.y() {
                return Err(WireError::Diagonal { index, from, to });
            }
        }
        Ok(Self { origin, points })
    }

    pub(crate) fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn origin(&self) -> ElementId {
        self.origin
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total Manhattan length of the polyline.
    pub fn length(&self) -> u64 {
        self.segments().map(|segment| segment.from.manhattan_distance(segment.to)).sum()
    }

    /// Consecutive vertex pairs, in path order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment { from: pair[0], to: pair[1] })
    }
}

/// One straight piece of a wire, oriented in the wire's direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn is_vertical(&self) -> bool {
        self.from.x() == self.to.x() && self.from.y() != self.to.y()
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y() == self.to.y() && self.from.x() != self.to.x()
    }

    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    TooFewPoints { len: usize },
    Diagonal { index: usize, from: Point, to: Point },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => write!(f, "a wire needs at least 2 points, got {len}"),
            Self::Diagonal { index, from, to } => {
                write!(f, "segment {index} from {from} to {to} is not axis-aligned")
            }
        }
    }
}

impl std::error::Error for WireError {}
