// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type the library hands back.  Non-finite pixels and
//! overflowing orbits are not errors; they are handled where they
//! occur.

use std::fmt;

/// Everything that can go wrong when setting up a render.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaneError {
    /// The pixel grid has no area.
    EmptyGrid {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The minimum corner of the window is not below and to the left
    /// of the maximum corner.
    InvertedWindow,
    /// A render was asked to run on zero threads.
    NoThreads,
    /// The filled buffer did not match the requested grid.
    BufferSize(usize),
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlaneError::EmptyGrid { width, height } => {
                write!(f, "Cannot render a {}x{} grid", width, height)
            }
            PlaneError::InvertedWindow => write!(
                f,
                "The minimum corner of the window is not left of and below the maximum corner"
            ),
            PlaneError::NoThreads => write!(f, "Thread count must be at least 1"),
            PlaneError::BufferSize(len) => {
                write!(f, "Pixel buffer of {} bytes does not fit the grid", len)
            }
        }
    }
}

impl failure::Fail for PlaneError {}
