// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::ports;
use crate::model::{Board, Point};

/// Points a walk may not land on.
///
/// Lives for exactly one routing pass: seeded from the board, then grown with every committed
/// wire vertex so later wires keep off earlier ones.
#[derive(Debug, Clone, Default)]
pub(crate) struct OccupiedSet {
    points: HashSet<Point>,
}

impl OccupiedSet {
    /// Element positions plus the end of every output stub.
    pub fn seeded(board: &Board) -> Self {
        let mut occupied = Self::default();
        for element in board.elements() {
            occupied.insert(element.position());
            if let Some(stub) = ports::stub_point(element) {
                occupied.insert(stub);
            }
        }
        occupied
    }

    /// Returns `true` if the point was not occupied before.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::OccupiedSet;
    use crate::model::{fixtures, Point};

    #[test]
    fn seeding_covers_positions_and_gate_stubs() {
        let occupied = OccupiedSet::seeded(&fixtures::and_gate_board());

        for point in [
            Point::new(100, 500),
            Point::new(300, 500),
            Point::new(200, 300),
            Point::new(200, 100),
            Point::new(200, 250),
        ] {
            assert!(occupied.contains(point), "expected {point} to be occupied");
        }
        assert_eq!(occupied.len(), 5);
        assert!(!occupied.contains(Point::new(100, 475)));
    }
}
