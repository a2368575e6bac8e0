// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal wire routing for logic-circuit puzzle boards.
//!
//! The crate is split the same way the data flows:
//! - [`model`]: board elements, grid points and the routed [`model::Wire`] paths.
//! - [`layout`]: the greedy Manhattan router that turns a board into wires.
//! - [`render`]: crossing-aware draw commands plus SVG and Unicode previews.

pub mod config;
pub mod layout;
pub mod model;
pub mod render;

pub use config::GatewireConfig;
pub use layout::{route_wires, Layouter, RouterConfig, RoutingError};
pub use model::{Board, Element, ElementId, ElementKind, Point, Rotation, Wire};
pub use render::{DrawCommands, LineDrawer, RenderOptions};
