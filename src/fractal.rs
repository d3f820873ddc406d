//! The two complex functions the fractal scenes are drawn from.  A
//! single-step map is evaluated once per pixel; an iteration step is
//! applied repeatedly with the pixel as its fixed parameter.

use num::complex::Complex64;

/// P(z) = z³ − 2z + 2, whose three roots seed the Newton picture.
/// The renderer colors this value directly; it does not iterate
/// toward a root.
pub fn newton(z: Complex64) -> Complex64 {
    z * z * z - 2.0 * z + 2.0
}

/// The Mandelbrot recurrence, P_c(z) = z² + c.
pub fn mandelbrot(c: Complex64, z: Complex64) -> Complex64 {
    z * z + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_polynomial_values() {
        assert_eq!(newton(Complex64::new(0.0, 0.0)), Complex64::new(2.0, 0.0));
        assert_eq!(newton(Complex64::new(1.0, 0.0)), Complex64::new(1.0, 0.0));
        // i³ − 2i + 2 = −i − 2i + 2
        assert_eq!(newton(Complex64::new(0.0, 1.0)), Complex64::new(2.0, -3.0));
    }

    #[test]
    fn mandelbrot_step() {
        let c = Complex64::new(3.0, 3.0);
        let z = mandelbrot(c, Complex64::new(0.0, 0.0));
        assert_eq!(z, c);
        assert!((z.norm() - 3.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            mandelbrot(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)),
            Complex64::new(0.0, 0.0)
        );
        assert_eq!(
            mandelbrot(Complex64::new(-1.0, 0.0), Complex64::new(0.0, 1.0)),
            Complex64::new(-2.0, 0.0)
        );
    }
}
