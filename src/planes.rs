//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the top left corner, and a window onto the real plane given by its
//! horizontal and vertical extent.  Rows grow downward on the
//! integral plane but upward on the real plane, so the vertical axis
//! is flipped along the way.
use num::complex::Complex64;

use crate::error::PlaneError;
use crate::plane::Point;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the x, y of a pixel in a region, column first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// The part of the real plane that gets drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

/// The window of the Newton scene: real and imaginary parts in [-3, 3].
pub const NEWTON_WINDOW: Window = Window {
    x_min: -3.0,
    x_max: 3.0,
    y_min: -3.0,
    y_max: 3.0,
};

/// The window of the Mandelbrot scene: real and imaginary parts in
/// [-1.5, 1.5].
pub const MANDELBROT_WINDOW: Window = Window {
    x_min: -1.5,
    x_max: 1.5,
    y_min: -1.5,
    y_max: 1.5,
};

impl Window {
    /// A window from its four edges.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Window {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// A square window centered on the origin reaching `half` in
    /// every direction.
    pub fn square(half: f64) -> Self {
        Window::new(-half, half, -half, half)
    }

    /// A window one plane unit per pixel, centered on the origin.
    pub fn centered(width: u32, height: u32) -> Self {
        let semi_width = f64::from(width) / 2.0;
        let semi_height = f64::from(height) / 2.0;
        Window::new(-semi_width, semi_width, -semi_height, semi_height)
    }
}

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a window onto the real cartesian plane.  Maps pixels from one
/// to points of the other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The window on the real plane the pixels are spread across.
    pub window: Window,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and the
    /// window it covers.  Refuses a plane with no pixels, and a window
    /// whose minimum corner is not left of and below its maximum.
    pub fn new(width: u32, height: u32, window: Window) -> Result<PlaneMapper, PlaneError> {
        if width == 0 || height == 0 {
            return Err(PlaneError::EmptyGrid { width, height });
        }

        if window.x_max < window.x_min || window.y_max < window.y_min {
            return Err(PlaneError::InvertedWindow);
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            window,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 as usize * self.integral_plane.1 as usize
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// of the real plane it stands for.  Column 0 is the left edge of
    /// the window and row 0 its top edge.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Point {
        let w = &self.window;
        Point::new(
            w.x_min + f64::from(pixel.0) * (w.x_max - w.x_min) / f64::from(self.integral_plane.0),
            w.y_max - f64::from(pixel.1) * (w.y_max - w.y_min) / f64::from(self.integral_plane.1),
        )
    }

    /// The same mapping, with the real plane read as the complex plane.
    pub fn pixel_to_complex(&self, pixel: &Pixel) -> Complex64 {
        let p = self.pixel_to_point(pixel);
        Complex64::new(p.x, p.y)
    }
}
