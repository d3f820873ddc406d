// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Subsets of the Euclidean plane, and the affine maps that move them
//! around.
//!
//! Every transform works by pulling the query point back through the
//! inverse map and asking the original set about it.  Translating a
//! disk to the right therefore means asking the untranslated disk
//! about a point shifted to the left; the disk itself never changes.

use crate::set::Set;

/// A point in plane space, independent of any pixel grid.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f64,
    /// Vertical coordinate, growing upward.
    pub y: f64,
}

impl Point {
    /// Build a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The closed disk: its boundary circle is included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disk {
    /// Center of the disk.
    pub center: Point,
    /// Radius of the disk.
    pub radius: f64,
}

/// A closed disk of the given center and radius.
pub fn disk(center: Point, radius: f64) -> Disk {
    Disk { center, radius }
}

impl Set<Point> for Disk {
    fn contains(&self, p: &Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// Everything on one side of a horizontal line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalHalfPlane {
    /// Height of the boundary line.
    pub y: f64,
    /// Keep the points below the line rather than above it.
    pub lower_than: bool,
}

/// Points with `p.y <= y` when `lower_than`, `p.y >= y` otherwise.
pub fn horizontal_half_plane(y: f64, lower_than: bool) -> HorizontalHalfPlane {
    HorizontalHalfPlane { y, lower_than }
}

impl Set<Point> for HorizontalHalfPlane {
    fn contains(&self, p: &Point) -> bool {
        if self.lower_than {
            p.y <= self.y
        } else {
            p.y >= self.y
        }
    }
}

/// Everything on one side of a vertical line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerticalHalfPlane {
    /// Position of the boundary line.
    pub x: f64,
    /// Keep the points left of the line rather than right of it.
    pub lower_than: bool,
}

/// Points with `p.x <= x` when `lower_than`, `p.x >= x` otherwise.
pub fn vertical_half_plane(x: f64, lower_than: bool) -> VerticalHalfPlane {
    VerticalHalfPlane { x, lower_than }
}

impl Set<Point> for VerticalHalfPlane {
    fn contains(&self, p: &Point) -> bool {
        if self.lower_than {
            p.x <= self.x
        } else {
            p.x >= self.x
        }
    }
}

/// A set moved by `(dx, dy)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Translated<S> {
    /// The set before translation.
    pub set: S,
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
}

impl<S: Set<Point>> Set<Point> for Translated<S> {
    fn contains(&self, p: &Point) -> bool {
        self.set.contains(&Point::new(p.x - self.dx, p.y - self.dy))
    }
}

/// A set stretched by `(lambda_x, lambda_y)` and then moved by
/// `(dx, dy)`.  Both factors must be non-zero; nothing here checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scaled<S> {
    /// The set before scaling.
    pub set: S,
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
    /// Horizontal stretch factor.
    pub lambda_x: f64,
    /// Vertical stretch factor.
    pub lambda_y: f64,
}

impl<S: Set<Point>> Set<Point> for Scaled<S> {
    fn contains(&self, p: &Point) -> bool {
        let back = Point::new(
            (1.0 / self.lambda_x) * p.x - self.dx / self.lambda_x,
            (1.0 / self.lambda_y) * p.y - self.dy / self.lambda_y,
        );
        self.set.contains(&back)
    }
}

/// A set turned counterclockwise by `theta` radians about the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotated<S> {
    /// The set before rotation.
    pub set: S,
    /// Angle in radians.
    pub theta: f64,
}

impl<S: Set<Point>> Set<Point> for Rotated<S> {
    fn contains(&self, p: &Point) -> bool {
        let (sin, cos) = (-self.theta).sin_cos();
        let back = Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
        self.set.contains(&back)
    }
}

/// The affine transforms, available on every set of points.
pub trait Transform: Set<Point> + Sized {
    /// Move the set by `(dx, dy)`.
    fn translate(self, dx: f64, dy: f64) -> Translated<Self> {
        Translated { set: self, dx, dy }
    }

    /// Stretch the set by `(lambda_x, lambda_y)` and move it by
    /// `(dx, dy)`.  A zero factor divides by zero.
    fn scale(self, dx: f64, dy: f64, lambda_x: f64, lambda_y: f64) -> Scaled<Self> {
        Scaled {
            set: self,
            dx,
            dy,
            lambda_x,
            lambda_y,
        }
    }

    /// Turn the set counterclockwise by `theta` radians.
    fn rotate(self, theta: f64) -> Rotated<Self> {
        Rotated { set: self, theta }
    }
}

impl<S: Set<Point>> Transform for S {}
