#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Point sets and complex fractals, rasterized
//!
//! A set of points in the plane can be described without listing any
//! points at all: it is enough to have a function that says, for any
//! point, whether it is in or out.  Disks and half-planes are such
//! functions, and so are their unions, intersections, differences,
//! and their translated, scaled, and rotated copies.  Drawing one is
//! a matter of asking the function about the point under every pixel.
//!
//! The same pixel-by-pixel loop draws two classic pictures of the
//! complex plane.  A polynomial is evaluated once per pixel and its
//! value domain-colored, hue from phase and shading from magnitude.
//! The Mandelbrot recurrence is iterated a fixed number of times with
//! the pixel as its parameter, and the pixels whose orbit stays small
//! are painted.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;

pub mod color;
pub mod error;
pub mod fractal;
pub mod integers;
pub mod lazy;
pub mod plane;
pub mod planes;
pub mod raster;
pub mod scene;
pub mod set;

pub use error::PlaneError;
pub use plane::{Point, Transform};
pub use raster::{Palette, Rasterizer};
pub use scene::{Escape, Scene};
pub use set::Set;
