use std::ops::Add;

/// A point on the complex plane, also used as the recurrence constant.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ORIGIN: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// `z^2` expanded as `(a^2 - b^2) + 2abi`.
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }

    /// Component-wise bound check: true once either coordinate leaves
    /// the square `[-radius, radius]^2`. Not the circular modulus test.
    #[must_use]
    pub fn outside_square(self, radius: f64) -> bool {
        self.real.abs() > radius || self.imag.abs() > radius
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_expands_binomial() {
        // (2 + 3i)^2 = 4 + 12i - 9 = -5 + 12i
        assert_eq!(Complex::new(2.0, 3.0).square(), Complex::new(-5.0, 12.0));
        assert_eq!(Complex::new(0.0, 1.0).square(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn square_of_origin_is_origin() {
        assert_eq!(Complex::ORIGIN.square(), Complex::ORIGIN);
    }

    #[test]
    fn add_is_component_wise() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }


    #[test]
    fn outside_square_checks_each_component() {
        assert!(!Complex::new(2.0, 2.0).outside_square(2.0));
        assert!(!Complex::new(-1.9, 1.9).outside_square(2.0));
        assert!(Complex::new(2.01, 0.0).outside_square(2.0));
        assert!(Complex::new(0.0, -2.01).outside_square(2.0));
    }

    #[test]
    fn outside_square_is_looser_than_modulus() {
        // |1.9 + 1.9i| is about 2.69, yet the point is still inside the square
        let z = Complex::new(1.9, 1.9);

        assert!((z.real * z.real + z.imag * z.imag).sqrt() > 2.0);
        assert!(!z.outside_square(2.0));
    }
}
