// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-kind port geometry.
//!
//! Gate artwork needs a short straight lead before a wire may turn: outputs leave through a stub,
//! inputs are approached from a point in front of the port. Offsets are given in the element's
//! reference orientation (quarter turn 1) and rotated with the element.

use crate::model::{Camouflage, Element, ElementKind, Offset, Point};

const OUTPUT_STUB: Offset = Offset::new(0, -25);
const LONG_APPROACH: Offset = Offset::new(0, 50);
const SHORT_APPROACH: Offset = Offset::new(0, 25);

/// What a target-side approach offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachAnchor {
    InputPort,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approach {
    pub anchor: ApproachAnchor,
    pub offset: Offset,
}

/// Routing-relevant port geometry of one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortProfile {
    /// Lead-out from the output port, if the wire must leave straight first.
    pub output_stub: Option<Offset>,
    /// Where the walk towards an input port ends; the port itself is appended afterwards.
    pub input_approach: Option<Approach>,
}

pub fn port_profile(kind: ElementKind) -> PortProfile {
    let approach = |anchor: ApproachAnchor, offset: Offset| Some(Approach { anchor, offset });
    match kind {
        ElementKind::AndGate | ElementKind::OrGate => PortProfile {
            output_stub: Some(OUTPUT_STUB),
            input_approach: approach(ApproachAnchor::InputPort, LONG_APPROACH),
        },
        ElementKind::Inverter => PortProfile {
            output_stub: Some(OUTPUT_STUB),
            input_approach: approach(ApproachAnchor::Position, SHORT_APPROACH),
        },
        ElementKind::CovertGate { camouflage } => PortProfile {
            output_stub: Some(OUTPUT_STUB),
            input_approach: match camouflage {
                Camouflage::Inverter => approach(ApproachAnchor::InputPort, SHORT_APPROACH),
                Camouflage::AndGate | Camouflage::OrGate => {
                    approach(ApproachAnchor::InputPort, LONG_APPROACH)
                }
            },
        },
        ElementKind::LightBulb | ElementKind::DangerSign | ElementKind::PowerSource => {
            PortProfile {
                output_stub: None,
                input_approach: approach(ApproachAnchor::Position, SHORT_APPROACH),
            }
        }
        ElementKind::Switch | ElementKind::Splitter => {
            PortProfile { output_stub: None, input_approach: None }
        }
    }
}

/// End of the output stub of `element`, if its kind has one.
pub(crate) fn stub_point(element: &Element) -> Option<Point> {
    let stub = port_profile(element.kind()).output_stub?;
    Some(element.output_port().shifted(stub.rotated(element.rotation())))
}

/// Point the walk towards `input_port` of `target` has to reach before the final lead-in.
pub(crate) fn approach_point(target: &Element, input_port: Point) -> Option<Point> {
    let approach = port_profile(target.kind()).input_approach?;
    let anchor = match approach.anchor {
        ApproachAnchor::InputPort => input_port,
        ApproachAnchor::Position => target.position(),
    };
    Some(anchor.shifted(approach.offset.rotated(target.rotation())))
}

/// Extra vertex between the end of the walk and `input_port` when the two share no axis.
///
/// The corner keeps the walk's coordinate across the approach direction, so the last segment
/// enters the port along the approach offset.
pub(crate) fn lead_in_corner(target: &Element, from: Point, input_port: Point) -> Option<Point> {
    if from.x() == input_port.x() || from.y() == input_port.y() {
        return None;
    }
    let approach = port_profile(target.kind()).input_approach?;
    let direction = approach.offset.rotated(target.rotation());
    if direction.dx == 0 {
        Some(Point::new(input_port.x(), from.y()))
    } else {
        Some(Point::new(from.x(), input_port.y()))
    }
}
