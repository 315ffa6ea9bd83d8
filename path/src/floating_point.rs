// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub use strict_num::{FiniteF32, NormalizedF32};

pub(crate) const FLOAT_PI: f32 = 3.14159265;

/// Checks that all values are finite.
pub(crate) fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|n| n.is_finite())
}

/// Subtracts two finite numbers in double precision.
///
/// Returns `None` when the result doesn't fit into `f32`.
pub(crate) fn checked_f32_sub(a: f32, b: f32) -> Option<f32> {
    debug_assert!(a.is_finite());
    debug_assert!(b.is_finite());

    let n = a as f64 - b as f64;
    if n > f32::MIN as f64 && n < f32::MAX as f64 {
        Some(n as f32)
    } else {
        None
    }
}
