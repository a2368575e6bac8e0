// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board model consumed by the router and the wire paths it produces.

pub mod board;
pub mod element;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod wire;

pub use board::{Board, BoardError};
pub use element::{Camouflage, Element, ElementKind};
pub use geometry::{Offset, Point, Rotation, RotationError, COORDINATE_LIMIT};
pub use ids::ElementId;
pub use wire::{Segment, Wire, WireError};
