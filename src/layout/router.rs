// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::RoutingError;
use super::occupied::OccupiedSet;
use super::ports;
use crate::model::{Board, Element, ElementId, Point, Wire};

/// Largest accepted [`RouterConfig::grid_size`].
pub const MAX_GRID_SIZE: i32 = 1 << 16;

/// Tuning knobs of the router.
///
/// The defaults match boards of roughly 1250×700 level units on a 50 unit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Step length of the walk, within `1..=MAX_GRID_SIZE`.
    pub grid_size: i32,
    /// Straight runs per connection before the pass fails with [`RoutingError::NoPath`].
    pub max_walk_runs: u32,
    /// Single steps per connection before the pass fails with [`RoutingError::Timeout`].
    pub max_walk_steps: u32,
    /// Score added to a detour candidate on another wire's vertex; `None` means two grid steps.
    pub detour_penalty: Option<u32>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { grid_size: 50, max_walk_runs: 100, max_walk_steps: 100, detour_penalty: None }
    }
}

impl RouterConfig {
    pub fn effective_detour_penalty(&self) -> u64 {
        match self.detour_penalty {
            Some(penalty) => u64::from(penalty),
            None => 2 * u64::from(self.grid_size.unsigned_abs()),
        }
    }
}

/// Greedy Manhattan router.
///
/// Each output connection is walked from the source's output port towards the target's input
/// port, preferring the axis with the larger remaining distance and sidestepping one grid step
/// when blocked. Wires may cross each other's segments but never share a vertex.
#[derive(Debug, Clone, Default)]
pub struct Layouter {
    config: RouterConfig,
}

impl Layouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Routes every output connection of `board`.
    ///
    /// Elements are processed in ascending id order and their outputs in list order, so the same
    /// board always yields the same wires. Any failure aborts the whole pass.
    pub fn route(&self, board: &Board) -> Result<Vec<Wire>, RoutingError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.config.grid_size) {
            return Err(RoutingError::InvalidGridSize { grid_size: self.config.grid_size });
        }

        let mut pass = RoutingPass::new(board, &self.config);
        let mut wires = Vec::with_capacity(board.connection_count());
        for source in board.elements() {
            pass.route_outputs(source, &mut wires)
                .map_err(|err| err.attributed_to(source.id()))?;
        }

        log::debug!(
            "routed {} wires for {} elements ({} occupied points)",
            wires.len(),
            board.len(),
            pass.occupied.len()
        );
        Ok(wires)
    }
}

/// Routes `board` with the default [`RouterConfig`].
pub fn route_wires(board: &Board) -> Result<Vec<Wire>, RoutingError> {
    Layouter::default().route(board)
}

/// State of a single routing pass.
struct RoutingPass<'a> {
    board: &'a Board,
    config: &'a RouterConfig,
    occupied: OccupiedSet,
    /// Positions wires must keep half a grid step away from.
    blockers: Vec<Point>,
}

impl<'a> RoutingPass<'a> {
    fn new(board: &'a Board, config: &'a RouterConfig) -> Self {
        let blockers = board
            .elements()
            .filter(|element| element.kind().blocks_routing())
            .map(Element::position)
            .collect();
        Self { board, config, occupied: OccupiedSet::seeded(board), blockers }
    }

    fn route_outputs(
        &mut self,
        source: &Element,
        wires: &mut Vec<Wire>,
    ) -> Result<(), RoutingError> {
        for &target_id in source.outputs() {
            let target = self
                .board
                .element(target_id)
                .ok_or(RoutingError::UnknownTarget { target: target_id })?;
            wires.push(self.route_connection(source, target)?);
        }
        Ok(())
    }

    fn route_connection(
        &mut self,
        source: &Element,
        target: &Element,
    ) -> Result<Wire, RoutingError> {
        let input_port = target
            .input_port(source.id())
            .ok_or(RoutingError::MissingInputPort { target: target.id(), source: source.id() })?;

        let mut wire = Wire::new(source.id());
        let mut start = source.output_port();
        wire.append(start);
        self.occupied.insert(start);

        if let Some(stub) = ports::stub_point(source) {
            wire.append(stub);
            start = stub;
        }

        let approach = ports::approach_point(target, input_port);
        let end = approach.unwrap_or(input_port);

        let mut watchdog = Watchdog::new(self.config, source.id(), target.id());
        let mut current = start;
        while current != end {
            watchdog.next_run()?;
            current = self.advance(current, end, &mut watchdog)?;
            wire.append(current);
            self.occupied.insert(current);
        }

        if approach.is_some() {
            if let Some(corner) = ports::lead_in_corner(target, current, input_port) {
                if self.on_element(corner) {
                    return Err(RoutingError::MisalignedInputPort {
                        target: target.id(),
                        source: source.id(),
                    });
                }
                wire.append(corner);
                self.occupied.insert(corner);
            }
            if wire.end() != Some(input_port) {
                wire.append(input_port);
            }
            self.occupied.insert(input_port);
        }
        if wire.points().len() < 2 {
            // Output and input port coincide; keep the two-point shape.
            wire.append(input_port);
        }

        log::debug!(
            "wire {} -> {}: {} vertices, length {}",
            source.id(),
            target.id(),
            wire.points().len(),
            wire.length()
        );
        Ok(wire)
    }

    /// Walks one straight run from `from` towards `end` and returns the next vertex.
    ///
    /// If the very first step of the run is rejected, the vertex is a one step detour
    /// perpendicular to the run instead.
    fn advance(
        &self,
        from: Point,
        end: Point,
        watchdog: &mut Watchdog,
    ) -> Result<Point, RoutingError> {
        let grid = self.config.grid_size;
        let heading = Heading::towards(from, end);

        let mut current = from;
        loop {
            let remaining = heading.remaining(current, end);
            if remaining == 0 {
                break;
            }
            watchdog.next_step()?;

            let distance = i32::try_from(remaining.min(i64::from(grid))).unwrap_or(grid);
            let candidate = heading.step(current, distance);
            if candidate != end && self.is_blocked(candidate) {
                break;
            }
            current = candidate;
        }

        if current != from {
            return Ok(current);
        }
        self.detour(from, end, heading).ok_or_else(|| watchdog.stuck())
    }

    /// One step perpendicular to `heading`, or `None` when both sides touch an element.
    ///
    /// A candidate on another wire's vertex pays the detour penalty and loses ties against a
    /// free one; remaining ties keep the first alternative.
    fn detour(&self, from: Point, end: Point, heading: Heading) -> Option<Point> {
        let grid = self.config.grid_size;
        let step_along = |a: i32, b: i32| {
            let distance = (i64::from(b) - i64::from(a)).abs().min(i64::from(grid));
            match i32::try_from(distance) {
                Ok(0) | Err(_) => grid,
                Ok(step) => step,
            }
        };

        let alternatives = if heading.is_vertical() {
            let step = step_along(from.x(), end.x());
            [from.translate(step, 0), from.translate(-step, 0)]
        } else {
            let step = step_along(from.y(), end.y());
            [from.translate(0, step), from.translate(0, -step)]
        };

        let penalty = self.config.effective_detour_penalty();
        alternatives
            .into_iter()
            .filter(|&point| point == end || !self.touches_element(point))
            .min_by_key(|&point| {
                let occupied = self.occupied.contains(point);
                let score = point.manhattan_distance(end) + if occupied { penalty } else { 0 };
                (score, occupied)
            })
    }

    fn is_blocked(&self, point: Point) -> bool {
        self.occupied.contains(point) || self.near_blocker(point)
    }

    fn touches_element(&self, point: Point) -> bool {
        self.on_element(point) || self.near_blocker(point)
    }

    fn on_element(&self, point: Point) -> bool {
        self.board.elements().any(|element| element.position() == point)
    }

    /// Within half a grid step of a non-splitter element: 4·d² < grid².
    fn near_blocker(&self, point: Point) -> bool {
        let grid = i64::from(self.config.grid_size);
        self.blockers.iter().any(|blocker| 4 * blocker.distance_squared(point) < grid * grid)
    }
}

/// Unit direction of a straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heading {
    dx: i32,
    dy: i32,
}

impl Heading {
    /// Along the axis with the larger remaining distance; ties go vertical.
    fn towards(from: Point, to: Point) -> Self {
        let dx = i64::from(to.x()) - i64::from(from.x());
        let dy = i64::from(to.y()) - i64::from(from.y());
        if dx.abs() > dy.abs() {
            Self { dx: unit(dx), dy: 0 }
        } else {
            Self { dx: 0, dy: unit(dy) }
        }
    }

    fn is_vertical(self) -> bool {
        self.dy != 0
    }

    fn remaining(self, from: Point, to: Point) -> i64 {
        if self.is_vertical() {
            (i64::from(to.y()) - i64::from(from.y())).abs()
        } else {
            (i64::from(to.x()) - i64::from(from.x())).abs()
        }
    }

    fn step(self, from: Point, distance: i32) -> Point {
        from.translate(self.dx * distance, self.dy * distance)
    }
}

fn unit(delta: i64) -> i32 {
    match delta.cmp(&0) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Per-connection iteration budget.
struct Watchdog {
    source: ElementId,
    target: ElementId,
    runs: u32,
    steps: u32,
    max_runs: u32,
    max_steps: u32,
}

impl Watchdog {
    fn new(config: &RouterConfig, source: ElementId, target: ElementId) -> Self {
        Self {
            source,
            target,
            runs: 0,
            steps: 0,
            max_runs: config.max_walk_runs,
            max_steps: config.max_walk_steps,
        }
    }

    fn next_run(&mut self) -> Result<(), RoutingError> {
        self.runs += 1;
        if self.runs > self.max_runs {
            log::warn!("no wire way found from {} to {}", self.source, self.target);
            return Err(RoutingError::NoPath { source: self.source, target: self.target });
        }
        Ok(())
    }

    /// Both detours touch an element, so the walk cannot continue.
    fn stuck(&self) -> RoutingError {
        log::warn!(
            "no wire way found from {} to {}: boxed in by elements",
            self.source,
            self.target
        );
        RoutingError::NoPath { source: self.source, target: self.target }
    }

    fn next_step(&mut self) -> Result<(), RoutingError> {
        self.steps += 1;
        if self.steps > self.max_steps {
            log::warn!("routing from {} to {} timed out", self.source, self.target);
            return Err(RoutingError::Timeout { source: self.source, target: self.target });
        }
        Ok(())
    }
}
