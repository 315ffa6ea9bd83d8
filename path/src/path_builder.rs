// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use crate::path::compute_bounds;
use crate::{Arc, Coords, FillRule, Path, PathCommand, Point};

/// A path builder.
///
/// Keeps track of the current point, so relative and absolute commands can be mixed freely.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    pub(crate) commands: Vec<PathCommand>,
    pub(crate) fill_rule: FillRule,
    last_move_to: Point,
    last_point: Point,
    move_to_required: bool,
}

impl Default for PathBuilder {
    fn default() -> Self {
        PathBuilder::new()
    }
}

impl PathBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        PathBuilder::from_commands(Vec::new())
    }

    /// Creates a new builder with a specified capacity.
    ///
    /// Each command, no matter the type, takes a single slot.
    pub fn with_capacity(capacity: usize) -> Self {
        PathBuilder::from_commands(Vec::with_capacity(capacity))
    }

    pub(crate) fn from_commands(commands: Vec<PathCommand>) -> Self {
        debug_assert!(commands.is_empty());

        PathBuilder {
            commands,
            fill_rule: FillRule::default(),
            last_move_to: Point::zero(),
            last_point: Point::zero(),
            move_to_required: true,
        }
    }

    /// Returns the current number of commands in the builder.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Checks if the builder has any commands added.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sets the fill rule of the resulting path.
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    /// Adds beginning of a contour.
    ///
    /// Multiple continuous MoveTo commands are not allowed.
    /// If the previous command was also MoveTo, it will be overwritten with the current one.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.push_move_to(Coords::Absolute, Point::from_xy(x, y));
    }

    /// Adds beginning of a contour, relative to the current point.
    ///
    /// When it overwrites a previous MoveTo, the resolved position is stored as an absolute one.
    pub fn rel_move_to(&mut self, dx: f32, dy: f32) {
        self.push_move_to(Coords::Relative, Point::from_xy(dx, dy));
    }

    fn push_move_to(&mut self, coords: Coords, p: Point) {
        if let Some(PathCommand::MoveTo(..)) = self.commands.last() {
            let pen = self.resolve(coords, p);
            if let Some(last) = self.commands.last_mut() {
                *last = PathCommand::MoveTo(Coords::Absolute, pen);
            }
            self.last_move_to = pen;
            self.last_point = pen;
        } else {
            self.move_to_required = false;
            self.push(PathCommand::MoveTo(coords, p));
        }
    }

    fn inject_move_to_if_needed(&mut self) {
        if self.move_to_required {
            let p = self.last_move_to;
            self.move_to(p.x, p.y);
        }
    }

    /// Adds a line from the last point.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::LineTo(Coords::Absolute, Point::from_xy(x, y)));
    }

    /// Adds a line from the last point, with the end point relative to it.
    pub fn rel_line_to(&mut self, dx: f32, dy: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::LineTo(Coords::Relative, Point::from_xy(dx, dy)));
    }

    /// Adds a cubic curve from the last point to `x`, `y`.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::CubicTo(
            Coords::Absolute,
            Point::from_xy(x1, y1),
            Point::from_xy(x2, y2),
            Point::from_xy(x, y),
        ));
    }

    /// Adds a cubic curve from the last point, with all points relative to it.
    pub fn rel_cubic_to(&mut self, dx1: f32, dy1: f32, dx2: f32, dy2: f32, dx: f32, dy: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::CubicTo(
            Coords::Relative,
            Point::from_xy(dx1, dy1),
            Point::from_xy(dx2, dy2),
            Point::from_xy(dx, dy),
        ));
    }

    /// Adds an elliptical arc from the last point to `x`, `y`.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn arc_to(&mut self, arc: Arc, x: f32, y: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::ArcTo(Coords::Absolute, arc, Point::from_xy(x, y)));
    }

    /// Adds an elliptical arc from the last point, with the end point relative to it.
    pub fn rel_arc_to(&mut self, arc: Arc, dx: f32, dy: f32) {
        self.inject_move_to_if_needed();
        self.push(PathCommand::ArcTo(Coords::Relative, arc, Point::from_xy(dx, dy)));
    }

    /// Closes the current contour.
    ///
    /// A closed contour connects the first and the last Point
    /// with a line, forming a continuous loop.
    ///
    /// Does nothing when `Path` is empty or already closed.
    pub fn close(&mut self) {
        // don't add a close if it's the first command or a repeat
        if !self.commands.is_empty() {
            if self.commands.last() != Some(&PathCommand::Close) {
                self.commands.push(PathCommand::Close);
            }
        }

        self.last_point = self.last_move_to;
        self.move_to_required = true;
    }

    /// Returns the current point in absolute coordinates, if any.
    pub fn last_point(&self) -> Option<Point> {
        if self.commands.is_empty() {
            None
        } else {
            Some(self.last_point)
        }
    }

    fn resolve(&self, coords: Coords, p: Point) -> Point {
        match coords {
            Coords::Absolute => p,
            Coords::Relative => self.last_point + p,
        }
    }

    fn push(&mut self, command: PathCommand) {
        match command {
            PathCommand::MoveTo(coords, p) => {
                self.last_move_to = self.resolve(coords, p);
                self.last_point = self.last_move_to;
            }
            PathCommand::LineTo(coords, p)
            | PathCommand::CubicTo(coords, _, _, p)
            | PathCommand::ArcTo(coords, _, p) => {
                self.last_point = self.resolve(coords, p);
            }
            PathCommand::Close => {}
        }

        self.commands.push(command);
    }

    /// Reset the builder.
    ///
    /// Memory is not deallocated.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.last_move_to = Point::zero();
        self.last_point = Point::zero();
        self.move_to_required = true;
    }

    /// Finishes the builder and returns a `Path`.
    ///
    /// Returns `None` when `Path` is empty, has only a MoveTo, or has non-finite values.
    pub fn finish(self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }

        // Just a move to? Bail.
        if self.commands.len() == 1 {
            return None;
        }

        if !self.commands.iter().all(|c| c.is_finite()) {
            return None;
        }

        let bounds = compute_bounds(&self.commands)?;

        Some(Path {
            commands: self.commands,
            bounds,
            fill_rule: self.fill_rule,
        })
    }
}
