// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use crate::floating_point::all_finite;
use crate::path_builder::PathBuilder;
use crate::path_geometry;
use crate::{Point, Rect};

/// Whether a command's coordinates are absolute or relative to the current point.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Coords {
    /// Coordinates are in the path's coordinate space.
    Absolute,
    /// Coordinates are offsets from the current point.
    Relative,
}

/// Elliptical arc size selector.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArcSize {
    Small,
    Large,
}

/// Elliptical arc sweep direction.
///
/// Clockwise is defined for a Y-down coordinate system, as in SVG.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

/// Elliptical arc parameters, using the SVG endpoint parameterization.
///
/// The start point is the current point and the end point is stored in the command.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Arc {
    /// The X radius.
    pub radius_x: f32,
    /// The Y radius.
    pub radius_y: f32,
    /// Ellipse rotation, in degrees.
    pub x_axis_rotation: f32,
    /// Which of the two candidate arcs to take.
    pub size: ArcSize,
    /// Which of the two candidate ellipses to take.
    pub sweep: SweepDirection,
}

impl Arc {
    /// Creates a circular arc with the specified radius and no rotation.
    pub fn circular(radius: f32, size: ArcSize, sweep: SweepDirection) -> Self {
        Arc {
            radius_x: radius,
            radius_y: radius,
            x_axis_rotation: 0.0,
            size,
            sweep,
        }
    }

    /// Returns `true` for `ArcSize::Large`.
    pub fn is_large(&self) -> bool {
        self.size == ArcSize::Large
    }

    /// Returns `true` for `SweepDirection::Clockwise`.
    pub fn is_clockwise(&self) -> bool {
        self.sweep == SweepDirection::Clockwise
    }

    fn is_finite(&self) -> bool {
        all_finite(&[self.radius_x, self.radius_y, self.x_axis_rotation])
    }
}

/// A path command, as it was recorded by the [`PathBuilder`].
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathCommand {
    MoveTo(Coords, Point),
    LineTo(Coords, Point),
    /// First control point, second control point and the end point.
    CubicTo(Coords, Point, Point, Point),
    ArcTo(Coords, Arc, Point),
    Close,
}

impl PathCommand {
    /// Returns command's coordinates mode.
    ///
    /// `Close` has no coordinates.
    pub fn coords(&self) -> Option<Coords> {
        match *self {
            PathCommand::MoveTo(coords, ..)
            | PathCommand::LineTo(coords, ..)
            | PathCommand::CubicTo(coords, ..)
            | PathCommand::ArcTo(coords, ..) => Some(coords),
            PathCommand::Close => None,
        }
    }

    /// Checks that the command is relative to the current point.
    pub fn is_relative(&self) -> bool {
        self.coords() == Some(Coords::Relative)
    }

    pub(crate) fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(_, p) | PathCommand::LineTo(_, p) => p.is_finite(),
            PathCommand::CubicTo(_, p1, p2, p) => {
                p1.is_finite() && p2.is_finite() && p.is_finite()
            }
            PathCommand::ArcTo(_, arc, p) => arc.is_finite() && p.is_finite(),
            PathCommand::Close => true,
        }
    }
}

/// A fill rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FillRule {
    /// Specifies that "inside" is computed by a non-zero sum of signed edge crossings.
    Winding,
    /// Specifies that "inside" is computed by an odd number of edge crossings.
    ///
    /// Also known as "alternate".
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::Winding
    }
}

/// A Bezier path with elliptical arcs.
///
/// Can be created via [`PathBuilder`].
///
/// Path is immutable and keeps commands exactly as they were recorded,
/// so relative commands stay relative. Use [`Path::segments`] to iterate
/// over the same geometry in absolute coordinates.
///
/// # Guarantees
///
/// - Has a valid, precomputed bounds.
/// - All points and arc parameters are finite.
/// - Has at least two commands.
/// - Each contour starts with a MoveTo.
/// - No duplicated Move.
/// - No duplicated Close.
#[derive(Clone, PartialEq)]
pub struct Path {
    pub(crate) commands: Vec<PathCommand>,
    pub(crate) bounds: Rect,
    pub(crate) fill_rule: FillRule,
}

impl Path {
    /// Returns the number of commands in the path.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Checks if path is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bounds of the path's points, control points included.
    ///
    /// Arcs are accounted for by their cubic approximation.
    ///
    /// The value is already calculated.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the fill rule the path was built with.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Returns recorded commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns an iterator over path's segments in absolute coordinates.
    pub fn segments(&self) -> PathSegmentsIter {
        PathSegmentsIter::new(&self.commands)
    }

    /// Returns the absolute position of the first `MoveTo`.
    pub fn start_point(&self) -> Point {
        match self.segments().next() {
            Some(PathSegment::MoveTo(p)) => p,
            _ => Point::zero(),
        }
    }

    /// Returns the absolute position of the pen after the last command.
    pub fn end_point(&self) -> Point {
        let mut iter = self.segments();
        while iter.next().is_some() {}
        iter.last_point
    }

    /// Returns a copy of the path where every arc is replaced with cubic curves.
    ///
    /// All commands of the new path are absolute.
    ///
    /// Returns `None` when nothing but a move is left after the conversion.
    pub fn to_cubics(&self) -> Option<Path> {
        let mut pb = PathBuilder::with_capacity(self.len() + 8);
        pb.set_fill_rule(self.fill_rule);

        let mut iter = self.segments();
        loop {
            let from = iter.last_point;
            let segment = match iter.next() {
                Some(v) => v,
                None => break,
            };

            match segment {
                PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
                PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
                PathSegment::CubicTo(p1, p2, p) => pb.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y),
                PathSegment::ArcTo(arc, p) => match path_geometry::arc_to_cubics(from, &arc, p) {
                    Some(cubics) => {
                        for [p1, p2, p3] in cubics {
                            pb.cubic_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
                        }
                    }
                    None => pb.line_to(p.x, p.y),
                },
                PathSegment::Close => pb.close(),
            }
        }

        pb.finish()
    }

    /// Clears the path and returns a `PathBuilder` that will reuse an allocated memory.
    pub fn clear(mut self) -> PathBuilder {
        self.commands.clear();
        PathBuilder::from_commands(self.commands)
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;

        let mut s = alloc::string::String::new();
        for segment in self.segments() {
            match segment {
                PathSegment::MoveTo(p) => s.write_fmt(format_args!("M {} {} ", p.x, p.y))?,
                PathSegment::LineTo(p) => s.write_fmt(format_args!("L {} {} ", p.x, p.y))?,
                PathSegment::CubicTo(p0, p1, p2) => s.write_fmt(format_args!(
                    "C {} {} {} {} {} {} ",
                    p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
                ))?,
                PathSegment::ArcTo(arc, p) => s.write_fmt(format_args!(
                    "A {} {} {} {} {} {} {} ",
                    arc.radius_x,
                    arc.radius_y,
                    arc.x_axis_rotation,
                    arc.is_large() as u8,
                    arc.is_clockwise() as u8,
                    p.x,
                    p.y
                ))?,
                PathSegment::Close => s.write_fmt(format_args!("Z "))?,
            }
        }

        s.pop(); // ' '

        f.debug_struct("Path")
            .field("segments", &s)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Writes SVG path data.
///
/// Commands are written as recorded, so relative commands use lowercase letters.
impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fn letter(coords: Coords, c: char) -> char {
            match coords {
                Coords::Absolute => c,
                Coords::Relative => c.to_ascii_lowercase(),
            }
        }

        for (i, command) in self.commands.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }

            match *command {
                PathCommand::MoveTo(coords, p) => {
                    write!(f, "{} {} {}", letter(coords, 'M'), Num(p.x), Num(p.y))?
                }
                PathCommand::LineTo(coords, p) => {
                    write!(f, "{} {} {}", letter(coords, 'L'), Num(p.x), Num(p.y))?
                }
                PathCommand::CubicTo(coords, p1, p2, p) => write!(
                    f,
                    "{} {} {} {} {} {} {}",
                    letter(coords, 'C'),
                    Num(p1.x),
                    Num(p1.y),
                    Num(p2.x),
                    Num(p2.y),
                    Num(p.x),
                    Num(p.y)
                )?,
                PathCommand::ArcTo(coords, arc, p) => write!(
                    f,
                    "{} {} {} {} {} {} {} {}",
                    letter(coords, 'A'),
                    Num(arc.radius_x),
                    Num(arc.radius_y),
                    Num(arc.x_axis_rotation),
                    arc.is_large() as u8,
                    arc.is_clockwise() as u8,
                    Num(p.x),
                    Num(p.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }

        Ok(())
    }
}

// Writes negative zero as `0`.
struct Num(f32);

impl core::fmt::Display for Num {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A path segment in absolute coordinates.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    ArcTo(Arc, Point),
    Close,
}

/// A path segments iterator.
///
/// Resolves relative commands against the current point.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct PathSegmentsIter<'a> {
    commands: &'a [PathCommand],
    index: usize,

    is_auto_close: bool,
    last_move_to: Point,
    last_point: Point,
}

impl<'a> PathSegmentsIter<'a> {
    pub(crate) fn new(commands: &'a [PathCommand]) -> Self {
        PathSegmentsIter {
            commands,
            index: 0,
            is_auto_close: false,
            last_move_to: Point::zero(),
            last_point: Point::zero(),
        }
    }

    /// Sets the auto closing mode. Off by default.
    ///
    /// When enabled, emits an additional `PathSegment::LineTo` from the current position
    /// to the previous `PathSegment::MoveTo`. And only then emits `PathSegment::Close`.
    pub fn set_auto_close(&mut self, flag: bool) {
        self.is_auto_close = flag;
    }

    /// Returns the current point, i.e. the end of the last returned segment.
    pub fn last_point(&self) -> Point {
        self.last_point
    }

    fn auto_close(&mut self) -> PathSegment {
        if self.is_auto_close && self.last_point != self.last_move_to {
            self.index -= 1;
            PathSegment::LineTo(self.last_move_to)
        } else {
            PathSegment::Close
        }
    }

    fn resolve(&self, coords: Coords, p: Point) -> Point {
        match coords {
            Coords::Absolute => p,
            Coords::Relative => self.last_point + p,
        }
    }
}

impl<'a> Iterator for PathSegmentsIter<'a> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let command = *self.commands.get(self.index)?;
        self.index += 1;

        match command {
            PathCommand::MoveTo(coords, p) => {
                self.last_move_to = self.resolve(coords, p);
                self.last_point = self.last_move_to;
                Some(PathSegment::MoveTo(self.last_move_to))
            }
            PathCommand::LineTo(coords, p) => {
                self.last_point = self.resolve(coords, p);
                Some(PathSegment::LineTo(self.last_point))
            }
            PathCommand::CubicTo(coords, p1, p2, p) => {
                let p1 = self.resolve(coords, p1);
                let p2 = self.resolve(coords, p2);
                self.last_point = self.resolve(coords, p);
                Some(PathSegment::CubicTo(p1, p2, self.last_point))
            }
            PathCommand::ArcTo(coords, arc, p) => {
                self.last_point = self.resolve(coords, p);
                Some(PathSegment::ArcTo(arc, self.last_point))
            }
            PathCommand::Close => {
                let seg = self.auto_close();
                self.last_point = self.last_move_to;
                Some(seg)
            }
        }
    }
}

/// Computes bounds over resolved points, arcs included via their cubic approximation.
pub(crate) fn compute_bounds(commands: &[PathCommand]) -> Option<Rect> {
    let mut points = Vec::with_capacity(commands.len() * 3);
    let mut iter = PathSegmentsIter::new(commands);
    loop {
        let from = iter.last_point;
        let segment = match iter.next() {
            Some(v) => v,
            None => break,
        };

        match segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(p),
            PathSegment::CubicTo(p1, p2, p) => points.extend_from_slice(&[p1, p2, p]),
            PathSegment::ArcTo(arc, p) => {
                if let Some(cubics) = path_geometry::arc_to_cubics(from, &arc, p) {
                    for cubic in cubics {
                        points.extend_from_slice(&cubic);
                    }
                }

                points.push(p);
            }
            PathSegment::Close => {}
        }
    }

    Rect::from_points(&points)
}
