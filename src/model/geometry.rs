// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest absolute coordinate a board may use.
///
/// Keeps every difference, squared distance and grid step the router computes well inside the
/// integer range.
pub const COORDINATE_LIMIT: i32 = 1 << 24;

/// A point in level space.
///
/// Level coordinates are integers; elements sit on a 50 unit grid and ports/stubs on half steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Moves the point, saturating at the integer range.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    /// Whether both coordinates lie within `±COORDINATE_LIMIT`.
    pub const fn is_in_range(self) -> bool {
        self.x.unsigned_abs() <= COORDINATE_LIMIT.unsigned_abs()
            && self.y.unsigned_abs() <= COORDINATE_LIMIT.unsigned_abs()
    }

    pub const fn shifted(self, offset: Offset) -> Self {
        self.translate(offset.dx, offset.dy)
    }

    /// City-block distance, the routing metric.
    pub fn manhattan_distance(self, other: Self) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx + dy
    }

    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement expressed in an element's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Maps a local offset into level space for an element turned by `rotation`.
    ///
    /// Quarter turn 1 is the element's reference orientation (offsets apply unchanged); every
    /// other turn rotates the offset by 90° steps around the element.
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let Self { dx, dy } = self;
        match rotation.0 {
            0 => Self::new(dy, -dx),
            1 => Self::new(dx, dy),
            2 => Self::new(-dy, dx),
            _ => Self::new(-dx, -dy),
        }
    }
}

/// Element orientation in quarter turns, always within `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    pub const QUARTER_0: Self = Self(0);
    pub const QUARTER_1: Self = Self(1);
    pub const QUARTER_2: Self = Self(2);
    pub const QUARTER_3: Self = Self(3);

    pub const fn new(quarter_turns: u8) -> Result<Self, RotationError> {
        if quarter_turns > 3 {
            return Err(RotationError { quarter_turns });
        }
        Ok(Self(quarter_turns))
    }
}

impl TryFrom<u8> for Rotation {
    type Error = RotationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rotation> for u8 {
    fn from(value: Rotation) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationError {
    pub quarter_turns: u8,
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation must be 0..=3 quarter turns, got {}", self.quarter_turns)
    }
}

impl std::error::Error for RotationError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Offset, Point, Rotation, RotationError, COORDINATE_LIMIT};

    #[rstest]
    #[case(Rotation::QUARTER_0, Offset::new(-25, 0))]
    #[case(Rotation::QUARTER_1, Offset::new(0, -25))]
    #[case(Rotation::QUARTER_2, Offset::new(25, 0))]
    #[case(Rotation::QUARTER_3, Offset::new(0, 25))]
    fn stub_offset_turns_with_the_element(#[case] rotation: Rotation, #[case] expected: Offset) {
        assert_eq!(Offset::new(0, -25).rotated(rotation), expected);
    }

    #[test]
    fn rotation_rejects_more_than_three_quarter_turns() {
        assert_eq!(Rotation::new(4), Err(RotationError { quarter_turns: 4 }));
        assert_eq!(Rotation::new(3), Ok(Rotation::QUARTER_3));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Point::new(-50, 100);
        let b = Point::new(25, -25);
        assert_eq!(a.manhattan_distance(b), 200);
        assert_eq!(b.manhattan_distance(a), 200);
    }

    #[test]
    fn translate_saturates_instead_of_wrapping() {
        assert_eq!(Point::new(i32::MAX - 10, 0).translate(50, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(0, i32::MIN).translate(0, -1), Point::new(0, i32::MIN));
    }

    #[test]
    fn range_check_is_inclusive() {
        assert!(Point::new(COORDINATE_LIMIT, -COORDINATE_LIMIT).is_in_range());
        assert!(!Point::new(COORDINATE_LIMIT + 1, 0).is_in_range());
        assert!(!Point::new(0, i32::MIN).is_in_range());
    }
}
