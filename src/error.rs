// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

use crate::Corner;

/// A reason why squircle parameters cannot produce a shape.
///
/// Generation itself never fails with this error. It returns `None` instead,
/// and the caller is expected to leave the element unclipped.
/// Use [`SquircleParams::validate`](crate::SquircleParams::validate) to find out why.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum SquircleError {
    /// Width or height is zero.
    #[error("box has zero width or height")]
    EmptySize,

    /// Width or height is negative.
    #[error("box has negative width or height")]
    NegativeSize,

    /// A corner radius is negative.
    #[error("{corner:?} corner radius is negative")]
    NegativeRadius {
        /// The first offending corner, in clockwise order from the top-left.
        corner: Corner,
    },

    /// All corner radii are zero, so there is nothing to round.
    #[error("all corner radii are zero")]
    NotRounded,

    /// A size, radius or smoothing value is NaN or infinite.
    #[error("non-finite value in squircle parameters")]
    NonFinite,
}
