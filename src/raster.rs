// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rasterizers: one pass over a pixel grid, asking a mathematical
//! object about every pixel.
//!
//! There are three kinds of object.  A set of points paints the
//! pixels it contains.  A single-step complex map is evaluated once
//! per pixel and the result domain-colored.  An iteration step is
//! applied a fixed number of times with the pixel as its parameter,
//! and the pixel is painted if the orbit ended up inside a boundary.
//!
//! No pixel depends on any other, so the grid is cut into horizontal
//! bands of rows and each band is handed to its own scoped thread.
//! Every thread owns its band outright; no locks are needed, and the
//! picture is the same whatever the thread count.

use crossbeam::thread::ScopedJoinHandle;
use image::{Rgb, RgbImage};
use itertools::iproduct;
use log::{debug, trace};
use num::complex::Complex64;
use std::panic;

use crate::color::domain_color;
use crate::error::PlaneError;
use crate::plane::Point;
use crate::planes::{Pixel, PlaneMapper, Window, MANDELBROT_WINDOW, NEWTON_WINDOW};
use crate::set::Set;

/// The two colors of a set or escape-time picture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Color of pixels in the set, or whose orbit stayed bounded.
    pub foreground: Rgb<u8>,
    /// Color of every pixel not painted.
    pub background: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

/// Apply `step` to `z = 0` exactly `iterations` times with `c` held
/// fixed, and report whether `|z|` ended below `boundary`.  There is
/// no early exit: an orbit that overflows to infinity or NaN simply
/// compares as unbounded at the end.
pub fn bounded<G>(step: &G, c: Complex64, iterations: usize, boundary: f64) -> bool
where
    G: Fn(Complex64, Complex64) -> Complex64 + ?Sized,
{
    let mut z = Complex64::new(0.0, 0.0);
    for _ in 0..iterations {
        z = step(c, z);
    }
    z.norm() < boundary
}

/// The size, palette, and thread count of a render.  Once set, this
/// object should not be mutable.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    threads: usize,
    palette: Palette,
}

impl Rasterizer {
    /// A single-threaded rasterizer for a `width` by `height` grid
    /// with the default palette.
    pub fn new(width: u32, height: u32) -> Result<Self, PlaneError> {
        if width == 0 || height == 0 {
            return Err(PlaneError::EmptyGrid { width, height });
        }
        Ok(Rasterizer {
            width,
            height,
            threads: 1,
            palette: Palette::default(),
        })
    }

    /// Spread the work over `threads` threads.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, PlaneError> {
        if threads == 0 {
            return Err(PlaneError::NoThreads);
        }
        self.threads = threads;
        Ok(self)
    }

    /// Paint with `palette` instead of black on white.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Width of the grid in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Draw a set of points, one plane unit per pixel with the origin
    /// in the middle of the grid.
    pub fn draw_set<S>(&self, set: &S) -> Result<RgbImage, PlaneError>
    where
        S: Set<Point> + Sync + ?Sized,
    {
        let planes = PlaneMapper::new(
            self.width,
            self.height,
            Window::centered(self.width, self.height),
        )?;
        let foreground = self.palette.foreground;
        self.render(&planes, |pixel| {
            if set.contains(&planes.pixel_to_point(pixel)) {
                Some(foreground)
            } else {
                None
            }
        })
    }

    /// Domain-color `map` over the square of half-width 3.  Pixels
    /// where `map` gives a value whose magnitude is infinite or NaN
    /// are left as background.
    pub fn draw_map<F>(&self, map: &F) -> Result<RgbImage, PlaneError>
    where
        F: Fn(Complex64) -> Complex64 + Sync + ?Sized,
    {
        let planes = PlaneMapper::new(self.width, self.height, NEWTON_WINDOW)?;
        self.render(&planes, |pixel| {
            let fz = map(planes.pixel_to_complex(pixel));
            if fz.norm().is_finite() {
                Some(domain_color(fz))
            } else {
                None
            }
        })
    }

    /// Run `step` for `iterations` steps at every pixel of the square
    /// of half-width 1.5, painting the pixels whose orbit stays
    /// within `boundary`.  See [`bounded`].
    pub fn draw_escape<G>(
        &self,
        step: &G,
        iterations: usize,
        boundary: f64,
    ) -> Result<RgbImage, PlaneError>
    where
        G: Fn(Complex64, Complex64) -> Complex64 + Sync + ?Sized,
    {
        let planes = PlaneMapper::new(self.width, self.height, MANDELBROT_WINDOW)?;
        let foreground = self.palette.foreground;
        self.render(&planes, |pixel| {
            if bounded(step, planes.pixel_to_complex(pixel), iterations, boundary) {
                Some(foreground)
            } else {
                None
            }
        })
    }

    /// Fill a background-colored grid band by band, letting `paint`
    /// decide the color of each pixel it wants to change.
    fn render<P>(&self, planes: &PlaneMapper, paint: P) -> Result<RgbImage, PlaneError>
    where
        P: Fn(&Pixel) -> Option<Rgb<u8>> + Sync,
    {
        let width = self.width as usize;
        let rows_per_band = (self.height as usize + self.threads - 1) / self.threads;
        let mut buffer: Vec<u8> = self
            .palette
            .background
            .0
            .iter()
            .cloned()
            .cycle()
            .take(planes.len() * 3)
            .collect();
        debug!(
            "Rendering {}x{} over {:?} in bands of {} rows",
            self.width, self.height, planes.window, rows_per_band
        );

        let paint = &paint;
        let bands: Vec<&mut [u8]> = buffer.chunks_mut(rows_per_band * width * 3).collect();
        let painted = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<usize>> = bands
                .into_iter()
                .enumerate()
                .map(|(band, pixels)| {
                    spawner.spawn(move |_| {
                        let top = band * rows_per_band;
                        let rows = pixels.len() / (width * 3);
                        trace!("Band {} covers rows {}..{}", band, top, top + rows);
                        let mut painted = 0;
                        for (row, column) in iproduct!(0..rows, 0..width) {
                            if let Some(Rgb(rgb)) = paint(&Pixel(column as u32, (top + row) as u32))
                            {
                                let offset = (row * width + column) * 3;
                                pixels[offset..offset + 3].copy_from_slice(&rgb);
                                painted += 1;
                            }
                        }
                        painted
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum::<usize>()
        })
        .unwrap_or_else(|e| panic::resume_unwind(e));
        debug!("Painted {} of {} pixels", painted, planes.len());

        let len = buffer.len();
        RgbImage::from_raw(self.width, self.height, buffer).ok_or(PlaneError::BufferSize(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::{mandelbrot, newton};
    use crate::plane::{disk, vertical_half_plane};
    use crate::set::{All, Empty, Singleton};

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn rejects_empty_grids_and_zero_threads() {
        assert_eq!(
            Rasterizer::new(0, 10).unwrap_err(),
            PlaneError::EmptyGrid {
                width: 0,
                height: 10
            }
        );
        let r = Rasterizer::new(10, 10).unwrap();
        assert_eq!(r.with_threads(0).unwrap_err(), PlaneError::NoThreads);
    }

    #[test]
    fn images_have_the_requested_size() {
        let r = Rasterizer::new(7, 3).unwrap();
        let image = r.draw_set(&All).unwrap();
        assert_eq!(image.dimensions(), (7, 3));
        assert!(image.pixels().all(|p| *p == BLACK));
        let image = r.draw_set(&Empty).unwrap();
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn grid_center_is_the_origin() {
        let r = Rasterizer::new(2, 2).unwrap();
        let image = r.draw_set(&Singleton(Point::new(0.0, 0.0))).unwrap();
        assert_eq!(*image.get_pixel(1, 1), BLACK);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(1, 0), WHITE);
        assert_eq!(*image.get_pixel(0, 1), WHITE);

        let corner = r.draw_set(&Singleton(Point::new(-1.0, 1.0))).unwrap();
        assert_eq!(*corner.get_pixel(0, 0), BLACK);
        assert_eq!(corner.pixels().filter(|p| **p == BLACK).count(), 1);
    }

    #[test]
    fn disk_is_painted_around_the_center() {
        let r = Rasterizer::new(4, 4).unwrap();
        let image = r.draw_set(&disk(Point::default(), 1.0)).unwrap();
        assert_eq!(*image.get_pixel(2, 2), BLACK);
        assert_eq!(*image.get_pixel(1, 2), BLACK);
        assert_eq!(*image.get_pixel(2, 1), BLACK);
        assert_eq!(*image.get_pixel(3, 2), BLACK);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn upper_rows_hold_positive_y() {
        let r = Rasterizer::new(4, 4).unwrap();
        let image = r.draw_set(&|p: &Point| p.y > 0.0).unwrap();
        for x in 0..4 {
            assert_eq!(*image.get_pixel(x, 0), BLACK);
            assert_eq!(*image.get_pixel(x, 1), BLACK);
            assert_eq!(*image.get_pixel(x, 2), WHITE);
            assert_eq!(*image.get_pixel(x, 3), WHITE);
        }
    }

    #[test]
    fn custom_palette() {
        let palette = Palette {
            foreground: Rgb([200, 10, 10]),
            background: Rgb([1, 2, 3]),
        };
        let r = Rasterizer::new(4, 4).unwrap().with_palette(palette);
        let image = r.draw_set(&vertical_half_plane(0.0, false)).unwrap();
        assert_eq!(*image.get_pixel(3, 0), palette.foreground);
        assert_eq!(*image.get_pixel(0, 0), palette.background);
    }

    #[test]
    fn thread_count_does_not_change_the_picture() {
        let shape = disk(Point::new(3.0, -2.0), 6.0);
        let single = Rasterizer::new(31, 17).unwrap();
        let expected = single.draw_set(&shape).unwrap();
        for threads in &[2, 3, 8, 40] {
            let r = single.clone().with_threads(*threads).unwrap();
            assert_eq!(r.draw_set(&shape).unwrap().as_raw(), expected.as_raw());
        }

        let expected = single.draw_map(&newton).unwrap();
        let r = single.clone().with_threads(4).unwrap();
        assert_eq!(r.draw_map(&newton).unwrap().as_raw(), expected.as_raw());
    }

    #[test]
    fn newton_pixels_are_domain_colored() {
        let r = Rasterizer::new(6, 6).unwrap();
        let image = r.draw_map(&newton).unwrap();
        // Pixel (3, 3) is z = 0, where P(z) = 2.
        assert_eq!(*image.get_pixel(3, 3), domain_color(Complex64::new(2.0, 0.0)));
        // Pixel (0, 0) is z = -3 + 3i.
        let z = Complex64::new(-3.0, 3.0);
        assert_eq!(*image.get_pixel(0, 0), domain_color(newton(z)));
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let r = Rasterizer::new(6, 6).unwrap();
        let map = |z: Complex64| {
            if z.re < 0.0 {
                Complex64::new(f64::NAN, 0.0)
            } else if z.re < 1.0 {
                Complex64::new(0.0, f64::INFINITY)
            } else {
                z
            }
        };
        let image = r.draw_map(&map).unwrap();
        for y in 0..6 {
            for x in 0..4 {
                assert_eq!(*image.get_pixel(x, y), WHITE);
            }
            assert_ne!(*image.get_pixel(4, y), WHITE);
        }
    }

    #[test]
    fn overflowing_magnitudes_are_skipped() {
        let r = Rasterizer::new(6, 6).unwrap();
        // Both parts are finite, but the modulus is not.
        let huge = |_: Complex64| Complex64::new(1.5e308, 1.5e308);
        let image = r.draw_map(&huge).unwrap();
        assert!(image.pixels().all(|pixel| *pixel == WHITE));
    }

    #[test]
    fn origin_never_escapes() {
        for n in 1..50 {
            assert!(bounded(&mandelbrot, Complex64::new(0.0, 0.0), n, 1e-9));
        }
        let r = Rasterizer::new(4, 4).unwrap();
        let image = r.draw_escape(&mandelbrot, 20, 1.5).unwrap();
        assert_eq!(*image.get_pixel(2, 2), BLACK);
    }

    #[test]
    fn far_points_escape_after_one_step() {
        assert!(!bounded(&mandelbrot, Complex64::new(3.0, 3.0), 1, 1.5));
    }

    #[test]
    fn overflowing_orbits_count_as_escaped() {
        // Hundreds of squarings of 1.5 overflow to infinity and then NaN.
        assert!(!bounded(&mandelbrot, Complex64::new(1.5, 1.5), 500, 1.5));
        let r = Rasterizer::new(4, 4).unwrap();
        let image = r.draw_escape(&mandelbrot, 500, 1.5).unwrap();
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(2, 2), BLACK);
    }

    #[test]
    fn escape_picture_is_symmetric_about_the_real_axis() {
        let r = Rasterizer::new(32, 32).unwrap().with_threads(3).unwrap();
        let image = r.draw_escape(&mandelbrot, 20, 1.5).unwrap();
        // Row y maps exactly to im = 1.5 - 3y/32, so rows y and 32 - y mirror.
        for y in 1..16 {
            for x in 0..32 {
                assert_eq!(image.get_pixel(x, y), image.get_pixel(x, 32 - y));
            }
        }
    }
}
