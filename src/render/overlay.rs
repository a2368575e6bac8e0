// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{ElementId, Point, Wire};

/// Diagnostic length readout for one wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthLabel {
    pub wire: usize,
    pub origin: ElementId,
    /// The second-to-last vertex; two-point wires use their end.
    pub anchor: Point,
    pub length: u64,
    pub text: String,
}

pub fn length_labels(wires: &[Wire]) -> Vec<LengthLabel> {
    wires
        .iter()
        .enumerate()
        .filter_map(|(index, wire)| {
            let points = wire.points();
            let anchor = *points.get(points.len().saturating_sub(2).max(1))?;
            let length = wire.length();
            Some(LengthLabel {
                wire: index,
                origin: wire.origin(),
                anchor,
                length,
                text: format!("{length}u"),
            })
        })
        .collect()
}
