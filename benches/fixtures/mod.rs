// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark boards (no RNG).

use gatewire::{Board, Element, ElementId, ElementKind, Point, Rotation};

const COLUMN_SPACING: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Stable case id used in benchmark names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn columns(self) -> u32 {
        match self {
            Self::Small => 4,
            Self::Medium => 16,
            Self::Large => 64,
        }
    }
}

/// Side-by-side switch -> AND gate -> light bulb columns. Every switch also feeds the gate of
/// the next column, so each neighbouring pair of columns produces one crossing.
pub fn board(case: Case) -> Board {
    let columns = case.columns();
    let mut board = Board::new();

    for column in 0..columns {
        let x = 100 + COLUMN_SPACING * column as i32;
        let (switch, gate, bulb) = ids(column);

        let mut switch_element = element(switch, ElementKind::Switch, x, 1000)
            .with_output(gate)
            .with_output_state(column % 2 == 0);
        if column + 1 < columns {
            switch_element = switch_element.with_output(ids(column + 1).1);
        }

        let mut gate_element = element(gate, ElementKind::AndGate, x, 600)
            .with_input_port(switch, Point::new(x - 25, 625))
            .with_output(bulb);
        if column > 0 {
            gate_element = gate_element.with_input_port(ids(column - 1).0, Point::new(x + 25, 625));
        }

        let bulb_element = element(bulb, ElementKind::LightBulb, x, 200)
            .with_input_port(gate, Point::new(x, 225));

        for element in [switch_element, gate_element, bulb_element] {
            board.insert(element).expect("unique ids");
        }
    }

    board
}

/// Upright element whose output port sits 25 units above its position.
fn element(id: ElementId, kind: ElementKind, x: i32, y: i32) -> Element {
    Element::new(id, kind, Point::new(x, y), Rotation::QUARTER_1, Point::new(x, y - 25))
}

fn ids(column: u32) -> (ElementId, ElementId, ElementId) {
    let base = 3 * column;
    (ElementId::new(base + 1), ElementId::new(base + 2), ElementId::new(base + 3))
}
