//! The pictures the demo can draw, and the frames of its animations.
//!
//! An animation is a little state machine advanced by a timer tick;
//! each tick yields the shape to draw next.  Nothing here keeps time.
//! Frames count from zero, so frame `k` of a scene is what tick `k + 1`
//! would draw, and rendering a frame is an ordinary one-shot
//! rasterization.

use image::RgbImage;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::PlaneError;
use crate::fractal::{mandelbrot, newton};
use crate::plane::{disk, horizontal_half_plane, vertical_half_plane, Point, Transform};
use crate::raster::Rasterizer;
use crate::set::{BoxedSet, Set};

/// How far a moving disk travels per tick, in plane units.
const DELTA: f64 = 50.0;

/// How many Mandelbrot steps to take, and the escape radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// Iterations per pixel.
    pub iterations: usize,
    /// Orbits ending with `|z|` below this are drawn.
    pub boundary: f64,
}

impl Default for Escape {
    fn default() -> Self {
        Escape {
            iterations: 20,
            boundary: 1.5,
        }
    }
}

/// Which animation is running, with everything its next tick needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Animation {
    /// A disk sliding upward and wrapping around.
    Translating {
        /// Current upward offset.
        delta_y: f64,
    },
    /// A small disk sliding upward while stretching sideways.
    Scaling {
        /// Current upward offset.
        delta_y: f64,
        /// Current horizontal stretch.
        lambda: f64,
    },
    /// A half-plane turning a quarter turn per tick.
    Rotating {
        /// Angle to draw at the next tick.
        theta: f64,
    },
}

impl Animation {
    /// Advance one tick on a canvas `canvas_height` units tall and
    /// return the shape to draw.
    pub fn tick(&mut self, canvas_height: f64) -> BoxedSet<Point> {
        match self {
            Animation::Translating { delta_y } => {
                let base = disk(Point::new(0.0, -170.0), 80.0);
                *delta_y = if *delta_y <= canvas_height {
                    *delta_y + DELTA
                } else {
                    DELTA
                };
                if *delta_y <= canvas_height {
                    base.translate(0.0, *delta_y).boxed()
                } else {
                    base.boxed()
                }
            }
            Animation::Scaling { delta_y, lambda } => {
                let base = disk(Point::new(0.0, -230.0), 20.0);
                *delta_y = if *delta_y <= canvas_height {
                    *delta_y + DELTA
                } else {
                    DELTA
                };
                *lambda = if *delta_y <= canvas_height {
                    *lambda + 0.5
                } else {
                    1.0
                };
                if *delta_y <= canvas_height {
                    base.scale(0.0, *delta_y, *lambda, 1.0).boxed()
                } else {
                    base.boxed()
                }
            }
            Animation::Rotating { theta } => {
                let shape = vertical_half_plane(220.0, false).rotate(*theta).boxed();
                *theta = (*theta + PI / 2.0) % (2.0 * PI);
                shape
            }
        }
    }
}

/// Everything the demo can draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    /// A disk of radius 50 at the origin.
    Disk,
    /// The half-plane below the x axis.
    HorizontalHalfPlane,
    /// The half-plane right of the y axis.
    VerticalHalfPlane,
    /// The right half of the disk.
    HalfDisk,
    /// A disk moving upward, one frame per tick.
    Translate,
    /// A disk moving upward and widening.
    Scale,
    /// A half-plane turning about the origin.
    Rotate,
    /// The domain-colored Newton polynomial.
    Newton,
    /// The escape-time Mandelbrot set.
    Mandelbrot,
}

impl Scene {
    /// Every scene, in menu order.
    pub const ALL: [Scene; 9] = [
        Scene::Disk,
        Scene::HorizontalHalfPlane,
        Scene::VerticalHalfPlane,
        Scene::HalfDisk,
        Scene::Translate,
        Scene::Scale,
        Scene::Rotate,
        Scene::Newton,
        Scene::Mandelbrot,
    ];

    /// The name the scene goes by on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scene::Disk => "disk",
            Scene::HorizontalHalfPlane => "horizontal-half-plane",
            Scene::VerticalHalfPlane => "vertical-half-plane",
            Scene::HalfDisk => "half-disk",
            Scene::Translate => "translate",
            Scene::Scale => "scale",
            Scene::Rotate => "rotate",
            Scene::Newton => "newton",
            Scene::Mandelbrot => "mandelbrot",
        }
    }

    /// A freshly started animation, for the scenes that move.
    pub fn animation(self) -> Option<Animation> {
        match self {
            Scene::Translate => Some(Animation::Translating { delta_y: 0.0 }),
            Scene::Scale => Some(Animation::Scaling {
                delta_y: 0.0,
                lambda: 1.0,
            }),
            Scene::Rotate => Some(Animation::Rotating { theta: 0.0 }),
            _ => None,
        }
    }

    /// The set of points drawn at `frame`, that is by tick `frame + 1`
    /// of a fresh animation, or `None` for the fractal scenes.  Still
    /// scenes ignore the frame.
    pub fn shape(self, frame: usize, canvas_height: f64) -> Option<BoxedSet<Point>> {
        if let Some(mut animation) = self.animation() {
            let mut shape = animation.tick(canvas_height);
            for _ in 0..frame {
                shape = animation.tick(canvas_height);
            }
            return Some(shape);
        }
        match self {
            Scene::Disk => Some(disk(Point::default(), 50.0).boxed()),
            Scene::HorizontalHalfPlane => Some(horizontal_half_plane(0.0, true).boxed()),
            Scene::VerticalHalfPlane => Some(vertical_half_plane(0.0, false).boxed()),
            Scene::HalfDisk => Some(
                vertical_half_plane(0.0, false)
                    .intersection(disk(Point::default(), 50.0))
                    .boxed(),
            ),
            _ => None,
        }
    }

    /// Draw `frame` of this scene.
    pub fn render(
        self,
        rasterizer: &Rasterizer,
        frame: usize,
        escape: Escape,
    ) -> Result<RgbImage, PlaneError> {
        match self {
            Scene::Newton => rasterizer.draw_map(&newton),
            Scene::Mandelbrot => {
                rasterizer.draw_escape(&mandelbrot, escape.iterations, escape.boundary)
            }
            _ => match self.shape(frame, f64::from(rasterizer.height())) {
                Some(shape) => rasterizer.draw_set(&shape),
                None => unreachable!("scene {} has no shape", self),
            },
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .iter()
            .cloned()
            .find(|scene| scene.name() == s)
            .ok_or_else(|| format!("Unknown scene '{}'", s))
    }
}
