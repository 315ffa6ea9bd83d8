// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`squircle` builds outlines of smoothly rounded rectangles.

A squircle is a rectangle whose corners are made of a short circular arc
surrounded by two cubic Bezier curves. The `corner_smoothing` factor controls
how much of each corner is taken by the curves: `0` produces plain circular corners,
`1` produces the smoothest profile.

Corners with different radii share the box edges, so large radii are reduced
to fit. The result is an abstract [`Path`] that can be translated into any
host geometry object, or printed as SVG path data.

```
use squircle::{CornerRadius, SquircleParams};

let path = SquircleParams::new(150.0, 150.0)
    .with_corner_radius(CornerRadius::uniform(24.0))
    .with_corner_smoothing(0.8)
    .to_path()
    .unwrap();
assert_eq!(path.start_point().y, 0.0);
```
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

#[cfg(not(any(feature = "std", feature = "no-std-float")))]
compile_error!("You have to activate either the `std` or the `no-std-float` feature.");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod corner;
mod corner_params;
mod error;
mod log;
mod normalize;
mod squircle;

pub use corner::*;
pub use corner_params::CornerPathParams;
pub use error::SquircleError;
pub use normalize::{normalize, NormalizedCorner};
pub use squircle::{generate, SquircleParams};

pub use squircle_path::{
    Arc, ArcSize, Coords, FillRule, NormalizedF32, Path, PathBuilder, PathCommand, PathSegment,
    PathSegmentsIter, Point, Rect, SweepDirection,
};
