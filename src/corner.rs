// Copyright 2024 The squircle Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A rectangle corner.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners, clockwise, starting from the top-left one.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// Returns the two corners sharing an edge with this one.
    pub fn adjacent(self) -> &'static [Adjacent; 2] {
        &ADJACENT[self.index()]
    }
}

/// A rectangle side.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Returns the side length of a `width` x `height` box.
    pub fn length(self, width: f32, height: f32) -> f32 {
        match self {
            Side::Top | Side::Bottom => width,
            Side::Left | Side::Right => height,
        }
    }
}

/// A neighbouring corner and the side shared with it.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Adjacent {
    pub side: Side,
    pub corner: Corner,
}

const fn adjacent(side: Side, corner: Corner) -> Adjacent {
    Adjacent { side, corner }
}

// Indexed by `Corner::index`.
const ADJACENT: [[Adjacent; 2]; 4] = [
    // TopLeft
    [
        adjacent(Side::Top, Corner::TopRight),
        adjacent(Side::Left, Corner::BottomLeft),
    ],
    // TopRight
    [
        adjacent(Side::Top, Corner::TopLeft),
        adjacent(Side::Right, Corner::BottomRight),
    ],
    // BottomRight
    [
        adjacent(Side::Bottom, Corner::BottomLeft),
        adjacent(Side::Right, Corner::TopRight),
    ],
    // BottomLeft
    [
        adjacent(Side::Bottom, Corner::BottomRight),
        adjacent(Side::Left, Corner::TopLeft),
    ],
];

/// Radii of the four corners.
///
/// The field order follows CSS and XAML: clockwise from the top-left corner.
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    /// Creates a new `CornerRadius`.
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        CornerRadius {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Creates a `CornerRadius` with the same radius for every corner.
    pub const fn uniform(radius: f32) -> Self {
        CornerRadius::new(radius, radius, radius, radius)
    }

    /// Returns the radius of the specified corner.
    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Returns the radius shared by all four corners, if they are equal.
    pub fn as_uniform(&self) -> Option<f32> {
        let r = self.top_left;
        if self.top_right == r && self.bottom_right == r && self.bottom_left == r {
            Some(r)
        } else {
            None
        }
    }

    /// Checks that all radii are zero.
    pub fn is_zero(&self) -> bool {
        self.as_uniform() == Some(0.0)
    }

    /// Checks that all radii are finite.
    pub fn is_finite(&self) -> bool {
        Corner::ALL.iter().all(|c| self.get(*c).is_finite())
    }

    /// Returns radii as a per-corner map.
    pub fn to_map(&self) -> CornerMap<f32> {
        CornerMap::from_fn(|corner| self.get(corner))
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        CornerRadius::uniform(radius)
    }
}

impl From<(f32, f32, f32, f32)> for CornerRadius {
    fn from(radii: (f32, f32, f32, f32)) -> Self {
        CornerRadius::new(radii.0, radii.1, radii.2, radii.3)
    }
}

/// A value per corner.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct CornerMap<T>([T; 4]);

impl<T> CornerMap<T> {
    /// Creates a new map by calling `f` for each corner, clockwise from the top-left.
    pub fn from_fn<F: FnMut(Corner) -> T>(mut f: F) -> Self {
        CornerMap([
            f(Corner::TopLeft),
            f(Corner::TopRight),
            f(Corner::BottomRight),
            f(Corner::BottomLeft),
        ])
    }

    /// Returns an iterator over corners and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> + '_ {
        Corner::ALL.iter().copied().zip(self.0.iter())
    }

    /// Maps each value.
    pub fn map<U, F: FnMut(Corner, &T) -> U>(&self, mut f: F) -> CornerMap<U> {
        CornerMap::from_fn(|corner| f(corner, &self[corner]))
    }
}

impl<T: Copy> CornerMap<T> {
    /// Creates a new map with the same value for every corner.
    pub fn splat(value: T) -> Self {
        CornerMap([value; 4])
    }
}

impl<T> core::ops::Index<Corner> for CornerMap<T> {
    type Output = T;

    fn index(&self, corner: Corner) -> &Self::Output {
        &self.0[corner.index()]
    }
}

impl<T> core::ops::IndexMut<Corner> for CornerMap<T> {
    fn index_mut(&mut self, corner: Corner) -> &mut Self::Output {
        &mut self.0[corner.index()]
    }
}
