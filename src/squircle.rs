// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use squircle_path::{Arc, ArcSize, FillRule, NormalizedF32, Path, PathBuilder, Point, SweepDirection};

use crate::log::{debug, trace};
use crate::{normalize, Corner, CornerMap, CornerPathParams, CornerRadius, SquircleError};

/// Squircle parameters.
///
/// Describes a `width` x `height` box whose corners are rounded with `corner_radius`
/// and smoothed with `corner_smoothing`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SquircleParams {
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
    /// Requested corner radii.
    ///
    /// Radii that don't fit into the box are reduced.
    pub corner_radius: CornerRadius,
    /// Corner smoothing, from 0 (circular corners) to 1 (maximum smoothing).
    ///
    /// Values outside of this range are clamped.
    pub corner_smoothing: f32,
    /// Keep smoothing when a corner runs out of space, instead of reducing it.
    pub preserve_smoothing: bool,
}

impl Default for SquircleParams {
    fn default() -> Self {
        SquircleParams {
            width: 0.0,
            height: 0.0,
            corner_radius: CornerRadius::default(),
            corner_smoothing: 0.0,
            preserve_smoothing: true,
        }
    }
}

impl SquircleParams {
    /// Creates new parameters for a box with sharp corners.
    pub fn new(width: f32, height: f32) -> Self {
        SquircleParams {
            width,
            height,
            ..SquircleParams::default()
        }
    }

    /// Sets corner radii.
    pub fn with_corner_radius(mut self, corner_radius: CornerRadius) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets corner smoothing.
    pub fn with_corner_smoothing(mut self, corner_smoothing: f32) -> Self {
        self.corner_smoothing = corner_smoothing;
        self
    }

    /// Sets the smoothing preservation mode.
    pub fn with_preserve_smoothing(mut self, preserve_smoothing: bool) -> Self {
        self.preserve_smoothing = preserve_smoothing;
        self
    }

    /// Returns corner smoothing clamped to the 0..=1 range.
    pub fn smoothing(&self) -> NormalizedF32 {
        NormalizedF32::new_clamped(self.corner_smoothing)
    }

    /// Checks that parameters describe a rounded box.
    ///
    /// When `check_size` is not set, a zero width or height is allowed,
    /// which is useful before the layout is done.
    /// Negative sizes are never allowed.
    pub fn validate(&self, check_size: bool) -> Result<(), SquircleError> {
        if !(self.width.is_finite()
            && self.height.is_finite()
            && self.corner_smoothing.is_finite()
            && self.corner_radius.is_finite())
        {
            return Err(SquircleError::NonFinite);
        }

        if self.width < 0.0 || self.height < 0.0 {
            return Err(SquircleError::NegativeSize);
        }

        if check_size && (self.width == 0.0 || self.height == 0.0) {
            return Err(SquircleError::EmptySize);
        }

        if let Some(corner) = Corner::ALL
            .iter()
            .copied()
            .find(|c| self.corner_radius.get(*c) < 0.0)
        {
            return Err(SquircleError::NegativeRadius { corner });
        }

        if self.corner_radius.is_zero() {
            return Err(SquircleError::NotRounded);
        }

        Ok(())
    }

    /// Checks that parameters describe a rounded box.
    ///
    /// See [`validate`](Self::validate) for details.
    pub fn is_valid(&self, check_size: bool) -> bool {
        self.validate(check_size).is_ok()
    }

    /// Calculates per-corner parameters.
    ///
    /// The box size is not checked, so this works for a zero-sized box as well.
    ///
    /// Returns `None` when parameters are invalid.
    pub fn corner_params(&self) -> Option<CornerMap<CornerPathParams>> {
        self.check(false)?;
        Some(self.corner_params_unchecked())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn check(&self, check_size: bool) -> Option<()> {
        match self.validate(check_size) {
            Ok(()) => Some(()),
            Err(e) => {
                debug!(error = %e, params = ?self, "rejected squircle parameters");
                None
            }
        }
    }

    fn corner_params_unchecked(&self) -> CornerMap<CornerPathParams> {
        let smoothing = self.smoothing();

        if let Some(radius) = self.corner_radius.as_uniform() {
            let budget = self.width.min(self.height) / 2.0;
            let params = CornerPathParams::new(
                radius.min(budget),
                smoothing,
                self.preserve_smoothing,
                budget,
            );
            return CornerMap::splat(params);
        }

        let normalized = normalize(self.width, self.height, &self.corner_radius);
        normalized.map(|_, n| {
            CornerPathParams::new(n.radius, smoothing, self.preserve_smoothing, n.budget)
        })
    }

    /// Builds the squircle outline.
    ///
    /// Returns `None` when parameters are invalid or the box is empty.
    pub fn to_path(&self) -> Option<Path> {
        self.build_path(true)
    }

    fn build_path(&self, check_size: bool) -> Option<Path> {
        self.check(check_size)?;

        let params = self.corner_params_unchecked();
        trace!(?params, "corner parameters");

        let path = outline(self.width, self.height, &params);
        if path.is_none() {
            debug!(width = self.width, height = self.height, "failed to build a squircle path");
        }

        path
    }
}

/// Builds a squircle outline.
///
/// A shortcut for [`SquircleParams::to_path`] that allows skipping the box size check.
pub fn generate(
    width: f32,
    height: f32,
    corner_radius: CornerRadius,
    corner_smoothing: f32,
    preserve_smoothing: bool,
    check_size: bool,
) -> Option<Path> {
    SquircleParams::new(width, height)
        .with_corner_radius(corner_radius)
        .with_corner_smoothing(corner_smoothing)
        .with_preserve_smoothing(preserve_smoothing)
        .build_path(check_size)
}

// move + 4 * (cubic + arc + cubic) + 4 lines + close
const OUTLINE_CAPACITY: usize = 18;

// A clockwise outline starting right before the top-right corner.
fn outline(width: f32, height: f32, params: &CornerMap<CornerPathParams>) -> Option<Path> {
    let top_left = &params[Corner::TopLeft];
    let top_right = &params[Corner::TopRight];
    let bottom_right = &params[Corner::BottomRight];
    let bottom_left = &params[Corner::BottomLeft];

    let mut pb = PathBuilder::with_capacity(OUTLINE_CAPACITY);
    pb.set_fill_rule(FillRule::EvenOdd);

    pb.move_to(width - top_right.p, 0.0);
    push_corner(&mut pb, Corner::TopRight, top_right);

    pb.line_to(width, height - bottom_right.p);
    push_corner(&mut pb, Corner::BottomRight, bottom_right);

    pb.line_to(bottom_left.p, height);
    push_corner(&mut pb, Corner::BottomLeft, bottom_left);

    pb.line_to(0.0, top_left.p);
    push_corner(&mut pb, Corner::TopLeft, top_left);

    pb.line_to(width - top_right.p, 0.0);
    pb.close();

    pb.finish()
}

// Corner curves are defined for the top-right corner
// and rotated by 90 degrees for each next corner.
fn orient(corner: Corner, x: f32, y: f32) -> Point {
    let mut p = Point::from_xy(x, y);
    match corner {
        Corner::TopRight => {}
        Corner::BottomRight => p.rotate_cw(),
        Corner::BottomLeft => p = -p,
        Corner::TopLeft => p.rotate_ccw(),
    }

    p
}

fn push_corner(pb: &mut PathBuilder, corner: Corner, params: &CornerPathParams) {
    if !params.is_rounded() {
        return;
    }

    let CornerPathParams {
        a,
        b,
        c,
        d,
        corner_radius,
        arc_section_length,
        ..
    } = *params;

    let p1 = orient(corner, a, 0.0);
    let p2 = orient(corner, a + b, 0.0);
    let p3 = orient(corner, a + b + c, d);
    pb.rel_cubic_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);

    let arc = Arc::circular(corner_radius, ArcSize::Small, SweepDirection::Clockwise);
    let end = orient(corner, arc_section_length, arc_section_length);
    pb.rel_arc_to(arc, end.x, end.y);

    let p1 = orient(corner, d, c);
    let p2 = orient(corner, d, b + c);
    let p3 = orient(corner, d, a + b + c);
    pb.rel_cubic_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
}
