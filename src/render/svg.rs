// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{DrawCommands, DrawPrimitive, Hop, Stroke};

/// Padding around the drawing, in level units.
const MARGIN: i64 = 25;

/// Writes `commands` as a standalone SVG document.
///
/// Strokes become `<line>` elements; hops become half-ellipse arcs bulging to +x, as wide as half
/// their radius.
pub fn to_svg(commands: &DrawCommands) -> String {
    let ((min_x, min_y), (max_x, max_y)) = bounds(commands);
    let mut svg = String::new();
    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox=""#);
    push_int(&mut svg, min_x - MARGIN);
    svg.push(' ');
    push_int(&mut svg, min_y - MARGIN);
    svg.push(' ');
    push_int(&mut svg, max_x - min_x + 2 * MARGIN);
    svg.push(' ');
    push_int(&mut svg, max_y - min_y + 2 * MARGIN);
    svg.push_str(&format!(
        "\" fill=\"none\" stroke-width=\"{}\" stroke-linecap=\"round\">\n",
        commands.line_width
    ));

    for primitive in &commands.primitives {
        match primitive {
            DrawPrimitive::Stroke(stroke) => push_stroke(&mut svg, stroke),
            DrawPrimitive::Hop(hop) => push_hop(&mut svg, hop),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_stroke(svg: &mut String, stroke: &Stroke) {
    svg.push_str("  <line x1=\"");
    push_int(svg, stroke.from.x());
    svg.push_str("\" y1=\"");
    push_int(svg, stroke.from.y());
    svg.push_str("\" x2=\"");
    push_int(svg, stroke.to.x());
    svg.push_str("\" y2=\"");
    push_int(svg, stroke.to.y());
    svg.push_str(&format!("\" stroke=\"{}\"/>\n", stroke.color));
}

fn push_hop(svg: &mut String, hop: &Hop) {
    let Hop { center, radius, color, .. } = *hop;
    let rx = f64::from(radius) / 2.0;
    let (y, radius) = (i64::from(center.y()), i64::from(radius));
    svg.push_str("  <path d=\"M ");
    push_int(svg, center.x());
    svg.push(' ');
    push_int(svg, y - radius);
    svg.push_str(&format!(" A {rx} "));
    push_int(svg, radius);
    svg.push_str(" 0 0 1 ");
    push_int(svg, center.x());
    svg.push(' ');
    push_int(svg, y + radius);
    svg.push_str(&format!("\" stroke=\"{color}\"/>\n"));
}

fn push_int(svg: &mut String, value: impl itoa::Integer) {
    let mut buffer = itoa::Buffer::new();
    svg.push_str(buffer.format(value));
}

/// Smallest and largest `(x, y)` touched by any primitive.
fn bounds(commands: &DrawCommands) -> ((i64, i64), (i64, i64)) {
    let mut points = commands.primitives.iter().flat_map(|primitive| {
        let wide = |x: i32, y: i32| (i64::from(x), i64::from(y));
        match *primitive {
            DrawPrimitive::Stroke(stroke) => {
                [wide(stroke.from.x(), stroke.from.y()), wide(stroke.to.x(), stroke.to.y())]
            }
            DrawPrimitive::Hop(hop) => {
                let (x, y) = wide(hop.center.x(), hop.center.y());
                let radius = i64::from(hop.radius).abs();
                [(x - radius, y - radius), (x + radius, y + radius)]
            }
        }
    });
    let Some(first) = points.next() else {
        return ((0, 0), (0, 0));
    };
    points.fold((first, first), |(min, max), (x, y)| {
        ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
    })
}
