// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Board, Camouflage, Element, ElementId, ElementKind, Point, Rotation};

fn id(value: u32) -> ElementId {
    ElementId::new(value)
}

fn board_of(elements: impl IntoIterator<Item = Element>) -> Board {
    let mut board = Board::new();
    for element in elements {
        board.insert(element).expect("unique element ids");
    }
    board
}

fn element(value: u32, kind: ElementKind, position: (i32, i32), rotation: Rotation) -> Element {
    let output_port = Point::new(position.0, position.1 - 25);
    Element::new(id(value), kind, Point::new(position.0, position.1), rotation, output_port)
}

/// A switch at `(100, 50)` feeding a splitter straight below it.
pub(crate) fn two_element_board() -> Board {
    board_of([
        Element::new(
            id(1),
            ElementKind::Switch,
            Point::new(100, 50),
            Rotation::QUARTER_1,
            Point::new(100, 100),
        )
        .with_output(id(2))
        .with_output_state(true),
        Element::new(
            id(2),
            ElementKind::Splitter,
            Point::new(100, 250),
            Rotation::QUARTER_1,
            Point::new(100, 225),
        )
        .with_input_port(id(1), Point::new(100, 200)),
    ])
}

/// Two switches into an AND gate that drives a light bulb; signals flow upwards.
pub(crate) fn and_gate_board() -> Board {
    board_of([
        element(1, ElementKind::Switch, (100, 500), Rotation::QUARTER_1)
            .with_output(id(3))
            .with_output_state(true),
        element(2, ElementKind::Switch, (300, 500), Rotation::QUARTER_1).with_output(id(3)),
        element(3, ElementKind::AndGate, (200, 300), Rotation::QUARTER_1)
            .with_input_port(id(1), Point::new(175, 325))
            .with_input_port(id(2), Point::new(225, 325))
            .with_output(id(4)),
        element(4, ElementKind::LightBulb, (200, 100), Rotation::QUARTER_1)
            .with_input_port(id(3), Point::new(200, 125)),
    ])
}

/// Every port-offset rule at once: inverter and covert stubs, a rotated OR gate and a
/// flipped light bulb. Wire 1 -> 5 crosses wire 5 -> 6 once at `(350, 475)`.
pub(crate) fn mixed_board() -> Board {
    board_of([
        element(1, ElementKind::Switch, (100, 500), Rotation::QUARTER_1)
            .with_output(id(2))
            .with_output(id(5))
            .with_output_state(true),
        element(2, ElementKind::Inverter, (100, 300), Rotation::QUARTER_1)
            .with_input_port(id(1), Point::new(100, 325))
            .with_output(id(3)),
        element(
            3,
            ElementKind::CovertGate { camouflage: Camouflage::Inverter },
            (300, 100),
            Rotation::QUARTER_1,
        )
        .with_input_port(id(2), Point::new(300, 125))
        .with_output(id(4)),
        element(4, ElementKind::DangerSign, (500, -100), Rotation::QUARTER_1)
            .with_input_port(id(3), Point::new(500, -75)),
        Element::new(
            id(5),
            ElementKind::OrGate,
            Point::new(400, 400),
            Rotation::QUARTER_0,
            Point::new(375, 400),
        )
        .with_input_port(id(1), Point::new(425, 375))
        .with_output(id(6)),
        Element::new(
            id(6),
            ElementKind::LightBulb,
            Point::new(200, 600),
            Rotation::QUARTER_3,
            Point::new(200, 625),
        )
        .with_input_port(id(5), Point::new(200, 575)),
        Element::new(
            id(7),
            ElementKind::Splitter,
            Point::new(250, 450),
            Rotation::QUARTER_1,
            Point::new(250, 450),
        ),
    ])
}

/// A splitter whose input at `(600, 300)` is ringed by switches one grid step away.
pub(crate) fn boxed_in_board() -> Board {
    let mut board = board_of([
        Element::new(
            id(1),
            ElementKind::Switch,
            Point::new(50, 300),
            Rotation::QUARTER_1,
            Point::new(100, 300),
        )
        .with_output(id(2)),
        Element::new(
            id(2),
            ElementKind::Splitter,
            Point::new(625, 300),
            Rotation::QUARTER_1,
            Point::new(650, 300),
        )
        .with_input_port(id(1), Point::new(600, 300)),
    ]);

    let mut next_id = 100;
    for x in [550, 600, 650] {
        for y in [250, 300, 350] {
            if (x, y) == (600, 300) {
                continue;
            }
            board
                .insert(element(next_id, ElementKind::Switch, (x, y), Rotation::QUARTER_1))
                .expect("unique ring ids");
            next_id += 1;
        }
    }
    board
}
