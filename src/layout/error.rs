// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::router::MAX_GRID_SIZE;
use crate::model::ElementId;

/// Why a routing pass produced no wires.
///
/// Search failures (`NoPath`, `Timeout`) only warrant a generic message. Every other fault names
/// the element the editor should highlight, see [`RoutingError::element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The walk ran out of straight runs before reaching the target.
    NoPath { source: ElementId, target: ElementId },
    /// The walk ran out of single steps before reaching the target.
    Timeout { source: ElementId, target: ElementId },
    InvalidGridSize { grid_size: i32 },
    UnknownTarget { target: ElementId },
    /// The target has no input port for wires coming from `source`.
    MissingInputPort { target: ElementId, source: ElementId },
    /// The corner joining the approach point to the input port lands on an element.
    MisalignedInputPort { target: ElementId, source: ElementId },
    /// A fault raised while routing the outputs of `element`.
    Attributed { element: ElementId, inner: Box<RoutingError> },
}

impl RoutingError {
    /// The element to highlight, if the fault can be pinned on one.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::Attributed { element, .. } => Some(*element),
            Self::MissingInputPort { target, .. } | Self::MisalignedInputPort { target, .. } => {
                Some(*target)
            }
            Self::NoPath { .. }
            | Self::Timeout { .. }
            | Self::InvalidGridSize { .. }
            | Self::UnknownTarget { .. } => None,
        }
    }

    pub fn is_search_failure(&self) -> bool {
        matches!(self, Self::NoPath { .. } | Self::Timeout { .. })
    }

    /// Pins the fault on `element` unless it already names one or is a search failure.
    pub(crate) fn attributed_to(self, element: ElementId) -> Self {
        if self.is_search_failure() || self.element().is_some() {
            return self;
        }
        Self::Attributed { element, inner: Box::new(self) }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath { source, target } => {
                write!(f, "no wire way found from element {source} to element {target}")
            }
            Self::Timeout { source, target } => {
                write!(f, "routing from element {source} to element {target} timed out")
            }
            Self::InvalidGridSize { grid_size } => {
                write!(f, "grid size must be within 1..={MAX_GRID_SIZE}, got {grid_size}")
            }
            Self::UnknownTarget { target } => {
                write!(f, "output references unknown element {target}")
            }
            Self::MissingInputPort { target, source } => {
                write!(f, "element {target} has no input port for element {source}")
            }
            Self::MisalignedInputPort { target, source } => {
                write!(f, "element {target} has no free lead-in corner for element {source}")
            }
            Self::Attributed { element, inner } => write!(f, "element {element}: {inner}"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Attributed { inner, .. } => Some(inner.as_ref()),
            _ => None,
        }
    }
}
