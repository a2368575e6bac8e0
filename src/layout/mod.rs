// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire routing.
//!
//! This module turns a [`Board`](crate::model::Board) into one [`Wire`](crate::model::Wire) per
//! output connection, avoiding elements and the vertices of previously routed wires.

pub mod error;
mod occupied;
pub mod ports;
pub mod router;

pub use error::RoutingError;
pub use ports::{port_profile, Approach, ApproachAnchor, PortProfile};
pub use router::{route_wires, Layouter, RouterConfig, MAX_GRID_SIZE};
