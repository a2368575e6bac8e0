// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rotation};
use super::ids::ElementId;

/// The gate a covert gate pretends to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camouflage {
    Inverter,
    AndGate,
    OrGate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    AndGate,
    OrGate,
    Inverter,
    CovertGate { camouflage: Camouflage },
    Switch,
    PowerSource,
    LightBulb,
    DangerSign,
    Splitter,
}

impl ElementKind {
    /// Splitters are drawn as dots on the wire itself, so wires may pass right next to them.
    pub fn blocks_routing(self) -> bool {
        !matches!(self, Self::Splitter)
    }
}

/// A placed element as seen by the router.
///
/// Ports are absolute level coordinates supplied by the board collaborator; the router never
/// derives them from the element's shape. `output_state` is only read when coloring wires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    position: Point,
    rotation: Rotation,
    output_port: Point,
    #[serde(default)]
    input_ports: BTreeMap<ElementId, Point>,
    #[serde(default)]
    outputs: Vec<ElementId>,
    #[serde(default)]
    output_state: bool,
}

impl Element {
    pub fn new(
        id: ElementId,
        kind: ElementKind,
        position: Point,
        rotation: Rotation,
        output_port: Point,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            rotation,
            output_port,
            input_ports: BTreeMap::new(),
            outputs: Vec::new(),
            output_state: false,
        }
    }

    /// Registers the input port that receives the wire coming from `source`.
    pub fn with_input_port(mut self, source: ElementId, port: Point) -> Self {
        self.input_ports.insert(source, port);
        self
    }

    /// Appends `target` to the output list; wires are routed in this order.
    pub fn with_output(mut self, target: ElementId) -> Self {
        self.outputs.push(target);
        self
    }

    pub fn with_output_state(mut self, on: bool) -> Self {
        self.output_state = on;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn output_port(&self) -> Point {
        self.output_port
    }

    pub fn input_port(&self, source: ElementId) -> Option<Point> {
        self.input_ports.get(&source).copied()
    }

    pub fn input_ports(&self) -> &BTreeMap<ElementId, Point> {
        &self.input_ports
    }

    /// Position, output port and every input port.
    pub fn coordinates(&self) -> impl Iterator<Item = Point> + '_ {
        [self.position, self.output_port].into_iter().chain(self.input_ports().values().copied())
    }

    pub fn outputs(&self) -> &[ElementId] {
        &self.outputs
    }

    pub fn output_state(&self) -> bool {
        self.output_state
    }

    pub fn set_output_state(&mut self, on: bool) {
        self.output_state = on;
    }

    /// Moves the element and every port attached to it.
    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translate(dx, dy);
        self.output_port = self.output_port.translate(dx, dy);
        for port in self.input_ports.values_mut() {
            *port = port.translate(dx, dy);
        }
    }

    /// Drops every connection to or from `other`.
    pub(crate) fn disconnect(&mut self, other: ElementId) {
        self.outputs.retain(|target| *target != other);
        self.input_ports.remove(&other);
    }
}
