// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::f32::consts::{FRAC_PI_4, PI, SQRT_2};

use squircle_path::NormalizedF32;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use squircle_path::NoStdFloat;

/// Bezier and arc parameters of a single corner.
///
/// Offsets are measured along the corner's first edge, in the direction of travel,
/// as in the top-right corner of a clockwise outline:
///
/// ```text
///            a      b     c  (d)
/// P1 ---- P2 ---- P3 ---- P4
///                           \  arc
///                            \
/// ```
///
/// `P1` is where the straight edge ends, `P4` is where the circular arc starts.
/// The whole corner run is `p` long along each of its two edges.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct CornerPathParams {
    /// Distance between the first and the second control point.
    pub a: f32,
    /// Distance between the second and the third control point.
    pub b: f32,
    /// Along-edge distance between the third control point and the arc start.
    pub c: f32,
    /// Across-edge distance between the third control point and the arc start.
    pub d: f32,
    /// Edge length consumed by the corner, on each side.
    pub p: f32,
    /// Radius of the circular arc section.
    pub corner_radius: f32,
    /// Horizontal and vertical extent of the arc section.
    pub arc_section_length: f32,
    /// Angle of the arc section, in degrees.
    pub arc_measure: f32,
    /// Smoothing actually used, after budget reduction.
    pub smoothing: f32,
}

impl CornerPathParams {
    /// Derives corner parameters.
    ///
    /// `radius` must already fit into `budget`, which [`normalize`](crate::normalize)
    /// and the uniform radius case guarantee.
    ///
    /// When the smoothed corner doesn't fit into `budget`, `preserve_smoothing`
    /// selects how to shrink it: keep the smoothing and pull the outer control points
    /// closer together, or lower the smoothing until the corner fits.
    /// A reduced smoothing never drops below zero, even when `radius` itself
    /// exceeds `budget`.
    ///
    /// A zero radius produces a sharp corner that consumes no edge length.
    pub fn new(radius: f32, smoothing: NormalizedF32, preserve_smoothing: bool, budget: f32) -> Self {
        if radius <= 0.0 {
            return CornerPathParams::default();
        }

        let mut smoothing = smoothing.get();
        let mut p = (1.0 + smoothing) * radius;

        if !preserve_smoothing {
            smoothing = smoothing.min(budget / radius - 1.0).max(0.0);
            p = p.min(budget);
        }

        // 90 degrees for a plain rounded corner, shrinks as smoothing grows.
        let arc_measure = 90.0 * (1.0 - smoothing);
        let arc_section_length = radians(arc_measure / 2.0).sin() * radius * SQRT_2;

        let angle_alpha = (90.0 - arc_measure) / 2.0;
        let p3_to_p4_distance = radius * radians(angle_alpha / 2.0).tan();

        let angle_beta = FRAC_PI_4 * smoothing;
        let c = p3_to_p4_distance * angle_beta.cos();
        let d = c * angle_beta.tan();

        let mut b = (p - arc_section_length - c - d) / 3.0;
        let mut a = 2.0 * b;

        if preserve_smoothing && p > budget {
            let p1_to_p3_max_distance = budget - d - arc_section_length - c;

            // Keep P1 and P2 apart.
            let min_a = p1_to_p3_max_distance / 6.0;
            let max_b = p1_to_p3_max_distance - min_a;

            b = b.min(max_b);
            a = p1_to_p3_max_distance - b;
            p = budget;
        }

        CornerPathParams {
            a,
            b,
            c,
            d,
            p,
            corner_radius: radius,
            arc_section_length,
            arc_measure,
            smoothing,
        }
    }

    /// Checks that the corner is rounded.
    pub fn is_rounded(&self) -> bool {
        self.corner_radius > 0.0
    }
}

fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
