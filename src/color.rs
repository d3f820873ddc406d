// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Domain coloring: turning a complex number into a color.
//!
//! The phase of the number picks the hue, so going once around the
//! origin walks once around the color wheel.  The magnitude is cut
//! into bands whose edges sit at 1, e, e², e³, ...; within a band the
//! color stays bright and saturated, and it dips sharply right at the
//! band edges, which draws thin contour rings around zeros and poles.
//! This is the mapping Claudio Rocchini used for the color complex
//! plot in Wikipedia's article on complex analysis.

use image::Rgb;
use num::complex::Complex64;
use std::f64::consts::{E, PI};

const TWO_PI: f64 = 2.0 * PI;

/// Three channels in [0, 1].  Whether they mean hue, saturation,
/// value or red, green, blue is up to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ColorTriplet(pub f64, pub f64, pub f64);

/// The edges `(r0, r1)` of the magnitude band holding `m`: either
/// `(0, 1)`, or `(e^k, e^(k+1))` for the smallest `k` with
/// `m <= e^(k+1)`.
pub fn band(m: f64) -> (f64, f64) {
    let (mut r0, mut r1) = (0.0, 1.0);
    while m > r1 {
        r0 = r1;
        r1 *= E;
    }
    (r0, r1)
}

/// Where `m` sits inside its band, from 0 at the lower edge to 1 at
/// the upper edge.
pub fn band_fraction(m: f64) -> f64 {
    let (r0, r1) = band(m);
    (m - r0) / (r1 - r0)
}

/// Hue from phase, saturation and value from magnitude.
pub fn complex_to_hsv(z: Complex64) -> ColorTriplet {
    let mut t = z.arg();
    while t < 0.0 {
        t += TWO_PI;
    }
    while t >= TWO_PI {
        t -= TWO_PI;
    }
    let h = t / TWO_PI;

    let r = band_fraction(z.norm());

    // p and q are complementary distances from the nearest contour.
    // Cubing keeps p1 and q1 close to 1 except right at the edge, so
    // the contour lines stay thin.
    let p = if r < 0.5 { 2.0 * r } else { 2.0 * (1.0 - r) };
    let q = 1.0 - p;
    let p1 = 1.0 - q * q * q;
    let q1 = 1.0 - p * p * p;

    let s = 0.4 + 0.6 * p1;
    let v = 0.6 + 0.4 * q1;
    ColorTriplet(h, s, v)
}

/// The usual six-sector walk around the HSV hexagon.
pub fn hsv_to_rgb(hsv: ColorTriplet) -> ColorTriplet {
    let ColorTriplet(mut h, s, v) = hsv;

    if s == 0.0 {
        return ColorTriplet(v, v, v);
    }
    if h == 1.0 {
        h = 0.0;
    }

    let z = (6.0 * h).trunc();
    let f = 6.0 * h - z;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match z as i64 {
        0 => ColorTriplet(v, t, p),
        1 => ColorTriplet(q, v, p),
        2 => ColorTriplet(p, v, t),
        3 => ColorTriplet(p, q, v),
        4 => ColorTriplet(t, p, v),
        5 => ColorTriplet(v, p, q),
        sector => unreachable!("hue {} lands in HSV sector {}", h, sector),
    }
}

/// Scale each channel to 0..=255, truncating toward zero.
pub fn to_rgb8(rgb: ColorTriplet) -> Rgb<u8> {
    Rgb([
        (255.0 * rgb.0).trunc() as u8,
        (255.0 * rgb.1).trunc() as u8,
        (255.0 * rgb.2).trunc() as u8,
    ])
}

/// The full mapping from a complex value to a displayable pixel.
pub fn domain_color(z: Complex64) -> Rgb<u8> {
    to_rgb8(hsv_to_rgb(complex_to_hsv(z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn hue_follows_phase() {
        assert_eq!(complex_to_hsv(Complex64::new(1.0, 0.0)).0, 0.0);
        assert!(close(complex_to_hsv(Complex64::new(0.0, 1.0)).0, 0.25));
        assert!(close(complex_to_hsv(Complex64::new(-1.0, 1e-300)).0, 0.5));
        assert!(close(complex_to_hsv(Complex64::new(0.0, -1.0)).0, 0.75));
    }

    #[test]
    fn hue_ignores_positive_scaling() {
        let z = Complex64::new(-0.3, 0.7);
        let h = complex_to_hsv(z).0;
        for k in &[0.001, 0.5, 2.0, 17.0, 1e6] {
            assert!(close(complex_to_hsv(z * *k).0, h));
        }
    }

    #[test]
    fn hue_stays_in_unit_interval() {
        for i in 0..360 {
            let theta = (i as f64).to_radians() - PI;
            let h = complex_to_hsv(Complex64::from_polar(3.0, theta)).0;
            assert!(h >= 0.0 && h < 1.0, "hue {} for angle {}", h, theta);
        }
    }

    #[test]
    fn bands_grow_by_e() {
        assert_eq!(band(0.5), (0.0, 1.0));
        assert_eq!(band(1.0), (0.0, 1.0));
        assert_eq!(band(2.0), (1.0, E));
        assert_eq!(band(E), (1.0, E));
        assert_eq!(band(3.0), (E, E * E));
    }

    #[test]
    fn band_fraction_at_edges() {
        assert_eq!(band_fraction(0.0), 0.0);
        assert!(close(band_fraction(0.5), 0.5));
        // Magnitudes sitting exactly on an edge close off the band below.
        assert_eq!(band_fraction(1.0), 1.0);
        assert_eq!(band_fraction(E), 1.0);
        // Just past an edge, a fresh band starts from zero.
        assert!(band_fraction(1.0 + 1e-12) < 1e-9);
        assert!(band_fraction(E + 1e-12) < 1e-9);
    }

    #[test]
    fn contours_darken_at_band_edges() {
        let inside = complex_to_hsv(Complex64::new(0.5, 0.0));
        assert!(close(inside.1, 1.0));
        assert!(close(inside.2, 0.6));

        let edge = complex_to_hsv(Complex64::new(0.0, 0.0));
        assert!(close(edge.1, 0.4));
        assert!(close(edge.2, 1.0));

        // Closing a band and opening the next shade identically.
        for m in &[1.0, E, E * E] {
            let on_edge = complex_to_hsv(Complex64::new(*m, 0.0));
            assert!(close(on_edge.1, 0.4));
            assert!(close(on_edge.2, 1.0));
        }
    }

    #[test]
    fn gray_when_unsaturated() {
        assert_eq!(
            hsv_to_rgb(ColorTriplet(0.3, 0.0, 0.7)),
            ColorTriplet(0.7, 0.7, 0.7)
        );
    }

    #[test]
    fn primaries_and_secondaries() {
        assert_eq!(hsv_to_rgb(ColorTriplet(0.0, 1.0, 1.0)), ColorTriplet(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(ColorTriplet(1.0, 1.0, 1.0)), ColorTriplet(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(ColorTriplet(0.5, 1.0, 1.0)), ColorTriplet(0.0, 1.0, 1.0));
        let green = hsv_to_rgb(ColorTriplet(1.0 / 3.0, 1.0, 1.0));
        assert!(close(green.0, 0.0) && close(green.1, 1.0) && close(green.2, 0.0));
        let magenta = hsv_to_rgb(ColorTriplet(5.0 / 6.0, 1.0, 1.0));
        assert!(close(magenta.0, 1.0) && close(magenta.1, 0.0) && close(magenta.2, 1.0));
    }

    #[test]
    #[should_panic]
    fn hue_outside_the_wheel_is_fatal() {
        hsv_to_rgb(ColorTriplet(1.5, 1.0, 1.0));
    }

    #[test]
    fn channels_truncate() {
        assert_eq!(to_rgb8(ColorTriplet(1.0, 0.0, 0.5)), Rgb([255, 0, 127]));
        assert_eq!(to_rgb8(ColorTriplet(0.999, 0.004, 0.6)), Rgb([254, 1, 153]));
    }

    #[test]
    fn domain_color_of_one() {
        // Phase 0 is red; magnitude 1 sits on a contour edge.
        let c = domain_color(Complex64::new(1.0, 0.0));
        assert_eq!(c, Rgb([255, 153, 153]));
    }
}
