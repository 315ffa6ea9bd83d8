// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Elliptical arc math.
//!
//! Mainly for internal use. Do not rely on it!

#![allow(missing_docs)]

use arrayvec::ArrayVec;

use crate::floating_point::FLOAT_PI;
use crate::scalar::SCALAR_NEARLY_ZERO;
use crate::{Arc, Point};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use crate::NoStdFloat;

/// Control points and the end point of a cubic curve.
pub type CubicPoints = [Point; 3];

/// An arc converted from the endpoint to the center parameterization.
///
/// See SVG 1.1, appendix F.6.5.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CenterArc {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Ellipse rotation, in radians.
    pub rotation: f32,
    /// Start angle, in radians.
    pub start_angle: f32,
    /// Signed sweep angle, in radians.
    pub sweep_angle: f32,
}

impl CenterArc {
    /// Converts an arc from `from` to `to` into the center parameterization.
    ///
    /// Returns `None` when the arc degenerates into a straight line (a zero radius)
    /// or into nothing at all (coincident endpoints).
    pub fn from_endpoints(from: Point, arc: &Arc, to: Point) -> Option<Self> {
        if from == to {
            return None;
        }

        let mut rx = arc.radius_x.abs();
        let mut ry = arc.radius_y.abs();
        if rx == 0.0 || ry == 0.0 {
            return None;
        }

        let phi = arc.x_axis_rotation * (FLOAT_PI / 180.0);
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        // Step 1: compute (x1', y1')
        let dx2 = (from.x - to.x) * 0.5;
        let dy2 = (from.y - to.y) * 0.5;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        // Step 2: scale up radii that are too small to span the endpoints.
        let x1p2 = x1p * x1p;
        let y1p2 = y1p * y1p;
        let lambda = x1p2 / (rx * rx) + y1p2 / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        // Step 3: compute (cx', cy')
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let num = rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2;
        let den = rx2 * y1p2 + ry2 * x1p2;
        let mut coef = 0.0;
        if den != 0.0 {
            let sign = if arc.is_large() == arc.is_clockwise() { -1.0 } else { 1.0 };
            coef = sign * (num / den).max(0.0).sqrt();
        }
        let cxp = coef * (rx * y1p / ry);
        let cyp = coef * (-ry * x1p / rx);

        // Step 4: compute (cx, cy)
        let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) * 0.5;
        let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) * 0.5;

        // Step 5: compute angles
        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;

        let start_angle = vector_angle(1.0, 0.0, ux, uy);
        let mut sweep_angle = vector_angle(ux, uy, vx, vy);
        if !arc.is_clockwise() && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * FLOAT_PI;
        } else if arc.is_clockwise() && sweep_angle < 0.0 {
            sweep_angle += 2.0 * FLOAT_PI;
        }

        Some(CenterArc {
            center: Point::from_xy(cx, cy),
            radius_x: rx,
            radius_y: ry,
            rotation: phi,
            start_angle,
            sweep_angle,
        })
    }

    /// Returns a point on the ellipse at the specified angle.
    pub fn point_at(&self, angle: f32) -> Point {
        self.map_unit(Point::from_xy(angle.cos(), angle.sin()))
    }

    // Maps a unit circle point onto the ellipse.
    fn map_unit(&self, p: Point) -> Point {
        let x = self.radius_x * p.x;
        let y = self.radius_y * p.y;
        let (sin_phi, cos_phi) = (self.rotation.sin(), self.rotation.cos());
        Point::from_xy(
            self.center.x + cos_phi * x - sin_phi * y,
            self.center.y + sin_phi * x + cos_phi * y,
        )
    }
}

fn vector_angle(ux: f32, uy: f32, vx: f32, vy: f32) -> f32 {
    let dot = ux * vx + uy * vy;
    let det = ux * vy - uy * vx;
    det.atan2(dot)
}

/// Approximates an elliptical arc with up to four cubic curves,
/// each spanning at most 90 degrees.
///
/// Returns `None` when the arc has a zero radius and must be drawn as a line.
/// Returns an empty list when the endpoints are the same, since such an arc draws nothing.
pub fn arc_to_cubics(from: Point, arc: &Arc, to: Point) -> Option<ArrayVec<CubicPoints, 4>> {
    if from == to {
        return Some(ArrayVec::new());
    }

    let center_arc = CenterArc::from_endpoints(from, arc, to)?;

    // A tolerance keeps an exact quarter turn from being split in two.
    let count = (center_arc.sweep_angle.abs() / (FLOAT_PI * 0.5) - SCALAR_NEARLY_ZERO).ceil();
    let count = (count as usize).max(1).min(4);
    let delta = center_arc.sweep_angle / count as f32;

    let mut cubics = ArrayVec::new();
    let mut t1 = center_arc.start_angle;
    for _ in 0..count {
        let t2 = t1 + delta;
        let k = (4.0 / 3.0) * (delta / 4.0).tan();

        let (s1, c1) = (t1.sin(), t1.cos());
        let (s2, c2) = (t2.sin(), t2.cos());

        let p1 = center_arc.map_unit(Point::from_xy(c1 - k * s1, s1 + k * c1));
        let p2 = center_arc.map_unit(Point::from_xy(c2 + k * s2, s2 - k * c2));
        let p3 = center_arc.map_unit(Point::from_xy(c2, s2));
        cubics.push([p1, p2, p3]);

        t1 = t2;
    }

    // Snap to the exact end point to avoid drift.
    if let Some(last) = cubics.last_mut() {
        last[2] = to;
    }

    Some(cubics)
}
