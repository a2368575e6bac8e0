// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::geometry::{Point, COORDINATE_LIMIT};
use super::ids::ElementId;

/// The element graph handed to the router.
///
/// Elements are kept in ascending id order, which is the order the router processes them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardFile", into = "BoardFile")]
pub struct Board {
    elements: BTreeMap<ElementId, Element>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> Result<(), BoardError> {
        let id = element.id();
        if self.elements.contains_key(&id) {
            return Err(BoardError::DuplicateElement { id });
        }
        check_range(&element)?;
        self.elements.insert(id, element);
        Ok(())
    }

    /// Removes an element and every wire connection that referenced it.
    pub fn remove(&mut self, id: ElementId) -> Result<Element, BoardError> {
        let removed = self.elements.remove(&id).ok_or(BoardError::UnknownElement { id })?;
        for element in self.elements.values_mut() {
            element.disconnect(id);
        }
        Ok(removed)
    }

    /// Moves an element (and its ports) so that its position becomes `to`.
    ///
    /// A move that would push any port out of range leaves the element where it was.
    pub fn move_element(&mut self, id: ElementId, to: Point) -> Result<(), BoardError> {
        let element = self.elements.get_mut(&id).ok_or(BoardError::UnknownElement { id })?;
        if !to.is_in_range() {
            return Err(BoardError::CoordinateOutOfRange { id, point: to });
        }
        let from = element.position();
        let mut moved = element.clone();
        moved.translate(to.x() - from.x(), to.y() - from.y());
        check_range(&moved)?;
        *element = moved;
        Ok(())
    }

    pub fn set_output_state(&mut self, id: ElementId, on: bool) -> Result<(), BoardError> {
        let element = self.elements.get_mut(&id).ok_or(BoardError::UnknownElement { id })?;
        element.set_output_state(on);
        Ok(())
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Elements in ascending id order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of output edges, i.e. the number of wires a successful route produces.
    pub fn connection_count(&self) -> usize {
        self.elements.values().map(|element| element.outputs().len()).sum()
    }
}

fn check_range(element: &Element) -> Result<(), BoardError> {
    match element.coordinates().find(|point| !point.is_in_range()) {
        Some(point) => Err(BoardError::CoordinateOutOfRange { id: element.id(), point }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    DuplicateElement { id: ElementId },
    UnknownElement { id: ElementId },
    /// A position or port of element `id` lies beyond [`COORDINATE_LIMIT`].
    CoordinateOutOfRange { id: ElementId, point: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement { id } => write!(f, "duplicate element id {id}"),
            Self::UnknownElement { id } => write!(f, "unknown element {id}"),
            Self::CoordinateOutOfRange { id, point } => {
                write!(f, "element {id} has coordinate {point} beyond ±{COORDINATE_LIMIT}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// On-disk shape of a board: a flat element list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardFile {
    elements: Vec<Element>,
}

impl TryFrom<BoardFile> for Board {
    type Error = BoardError;

    fn try_from(file: BoardFile) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for element in file.elements {
            board.insert(element)?;
        }
        Ok(board)
    }
}

impl From<Board> for BoardFile {
    fn from(board: Board) -> Self {
        Self { elements: board.elements.into_values().collect() }
    }
}
