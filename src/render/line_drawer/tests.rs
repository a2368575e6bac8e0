// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{HorizontalLineIndex, LineDrawer};
use crate::layout::route_wires;
use crate::model::{fixtures, Board, ElementId, Point, Wire};
use crate::render::{Color, DrawCommands, Palette, RenderOptions};

fn wire(origin: u32, raw: &[(i32, i32)]) -> Wire {
    let points = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Wire::from_points(ElementId::new(origin), points).expect("axis aligned")
}

fn strokes_of(commands: &DrawCommands, wire: usize) -> Vec<((i32, i32), (i32, i32))> {
    commands
        .strokes()
        .filter(|stroke| stroke.wire == wire)
        .map(|stroke| ((stroke.from.x(), stroke.from.y()), (stroke.to.x(), stroke.to.y())))
        .collect()
}

fn draw(wires: &[Wire]) -> DrawCommands {
    LineDrawer::default().draw(&Board::new(), wires, false)
}

#[test]
fn single_straight_wire_is_one_stroke() {
    let commands = draw(&[wire(1, &[(100, 100), (100, 200)])]);

    assert_eq!(strokes_of(&commands, 0), vec![((100, 100), (100, 200))]);
    assert_eq!(commands.hops().count(), 0);
    assert_eq!(commands.line_width, 2.0);
}

#[test]
fn plain_cross_hops_once() {
    let wires = [wire(1, &[(50, 0), (50, 100)]), wire(2, &[(0, 50), (100, 50)])];
    let commands = draw(&wires);

    assert_eq!(commands.crossings(), vec![Point::new(50, 50)]);
    let hop = commands.hops().next().expect("one hop");
    assert_eq!(hop.wire, 0);
    assert_eq!(hop.radius, 15);

    assert_eq!(strokes_of(&commands, 0), vec![((50, 0), (50, 35)), ((50, 65), (50, 100))]);
    assert_eq!(strokes_of(&commands, 1), vec![((0, 50), (100, 50))]);
}

#[test]
fn upward_segment_splits_in_travel_order() {
    let wires = [
        wire(1, &[(50, 100), (50, 0)]),
        wire(2, &[(0, 50), (100, 50)]),
        wire(3, &[(0, 75), (100, 75)]),
    ];
    let commands = draw(&wires);

    assert_eq!(commands.crossings(), vec![Point::new(50, 50), Point::new(50, 75)]);
    // The 25 unit gap between the crossings is narrower than two hop radii.
    assert_eq!(strokes_of(&commands, 0), vec![((50, 100), (50, 90)), ((50, 35), (50, 0))]);
}

#[rstest]
#[case::vertical_ends_on_horizontal(&[(50, 0), (50, 50)], &[(0, 50), (100, 50)])]
#[case::horizontal_ends_on_vertical(&[(50, 0), (50, 100)], &[(50, 50), (100, 50)])]
#[case::corner_to_corner(&[(0, 0), (0, 100)], &[(0, 100), (100, 100)])]
#[case::disjoint(&[(200, 0), (200, 100)], &[(0, 50), (100, 50)])]
fn touching_is_not_crossing(#[case] vertical: &[(i32, i32)], #[case] horizontal: &[(i32, i32)]) {
    let commands = draw(&[wire(1, vertical), wire(2, horizontal)]);

    assert!(commands.crossings().is_empty());
    assert_eq!(commands.strokes().count(), 2);
}

#[test]
fn overlapping_horizontals_share_one_hop() {
    let wires = [
        wire(1, &[(50, 0), (50, 100)]),
        wire(2, &[(0, 50), (100, 50)]),
        wire(3, &[(80, 50), (20, 50)]),
    ];
    let commands = draw(&wires);

    assert_eq!(commands.crossings(), vec![Point::new(50, 50)]);
}

#[test]
fn repeated_vertices_draw_nothing() {
    let commands = draw(&[wire(1, &[(0, 25), (0, 25)])]);
    assert!(commands.primitives.is_empty());
}

#[test]
fn routed_board_bridges_its_only_crossing() {
    let board = fixtures::mixed_board();
    let wires = route_wires(&board).expect("route");
    let commands = LineDrawer::default().draw(&board, &wires, true);

    let hops = commands.hops().collect::<Vec<_>>();
    assert_eq!(hops.len(), 1);
    assert_eq!(hops[0].center, Point::new(350, 475));
    assert_eq!(hops[0].wire, 4);
    assert_eq!(
        strokes_of(&commands, 4),
        vec![
            ((375, 400), (350, 400)),
            ((350, 400), (350, 460)),
            ((350, 490), (350, 575)),
            ((350, 575), (200, 575)),
        ]
    );
}

#[rstest]
#[case(Palette::Dark, true, [0xffff00, 0xaaaaaa, 0xaaaaaa])]
#[case(Palette::Bright, true, [0xaacc00, 0x333333, 0x333333])]
#[case(Palette::Dark, false, [0xaaaaaa, 0xaaaaaa, 0xaaaaaa])]
fn colors_follow_origin_state(
    #[case] palette: Palette,
    #[case] power_visible: bool,
    #[case] expected: [u32; 3],
) {
    let board = fixtures::and_gate_board();
    let wires = route_wires(&board).expect("route");
    let drawer = LineDrawer::new(RenderOptions { palette, ..RenderOptions::default() });
    let commands = drawer.draw(&board, &wires, power_visible);

    for (index, color) in expected.into_iter().enumerate() {
        assert!(
            commands
                .strokes()
                .filter(|stroke| stroke.wire == index)
                .all(|stroke| stroke.color == Color(color)),
            "wire {index} should be drawn in {}",
            Color(color)
        );
    }
}

#[test]
fn unknown_origin_is_drawn_unpowered() {
    let commands = LineDrawer::default().draw(
        &fixtures::two_element_board(),
        &[wire(42, &[(0, 0), (0, 50)])],
        true,
    );
    assert!(commands.strokes().all(|stroke| stroke.color == Palette::Dark.off()));
}

#[test]
fn index_reports_sorted_open_interval_hits() {
    let wires = [
        wire(1, &[(0, 300), (100, 300)]),
        wire(2, &[(100, 100), (0, 100)]),
        wire(3, &[(0, 200), (40, 200)]),
        wire(4, &[(0, 0), (100, 0)]),
    ];
    let index = HorizontalLineIndex::build(&wires);

    assert_eq!(index.crossings(50, 300, 0).as_slice(), &[100]);
    assert_eq!(index.crossings(20, 0, 300).as_slice(), &[100, 200]);
    assert!(index.crossings(50, 0, 0).is_empty());
}

#[test]
fn extreme_coordinates_split_without_overflow() {
    let commands = draw(&[
        wire(1, &[(0, i32::MIN), (0, i32::MAX)]),
        wire(2, &[(-10, 0), (10, 0)]),
    ]);

    assert_eq!(commands.crossings(), vec![Point::new(0, 0)]);
    assert_eq!(
        strokes_of(&commands, 0),
        vec![((0, i32::MIN), (0, -15)), ((0, 15), (0, i32::MAX))]
    );
}
