// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::cmp::Ordering;

use crate::{Corner, CornerMap, CornerRadius};

/// A corner radius fitted into the space shared with its neighbours.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct NormalizedCorner {
    /// The requested radius, capped to `budget`.
    pub radius: f32,
    /// The maximum edge length the corner curve may consume along either side.
    pub budget: f32,
}

/// Distributes the box edges between corners with different radii.
///
/// Corners are processed from the largest requested radius to the smallest.
/// Each corner takes either what is left of a shared edge after an already
/// processed neighbour, or a share of it proportional to both radii.
/// Corners with equal radii are processed clockwise, starting from the top-left one.
///
/// Radii are expected to be finite and non-negative.
pub fn normalize(width: f32, height: f32, corner_radius: &CornerRadius) -> CornerMap<NormalizedCorner> {
    let requested = corner_radius.to_map();

    let mut order = Corner::ALL;
    // Stable, so ties keep the clockwise order.
    order.sort_by(|a, b| {
        requested[*b]
            .partial_cmp(&requested[*a])
            .unwrap_or(Ordering::Equal)
    });

    let mut budgets: CornerMap<Option<f32>> = CornerMap::splat(None);
    let mut radii = requested;

    for corner in order {
        let radius = radii[corner];
        let mut budget = f32::MAX;
        for adj in corner.adjacent() {
            let adj_radius = radii[adj.corner];
            if radius == 0.0 && adj_radius == 0.0 {
                budget = 0.0;
                break;
            }

            let side_length = adj.side.length(width, height);
            let side_budget = match budgets[adj.corner] {
                Some(adj_budget) => side_length - adj_budget,
                None => radius / (radius + adj_radius) * side_length,
            };

            budget = budget.min(side_budget);
        }

        budgets[corner] = Some(budget);
        radii[corner] = radius.min(budget);
    }

    CornerMap::from_fn(|corner| NormalizedCorner {
        radius: radii[corner],
        budget: budgets[corner].unwrap_or(0.0),
    })
}
