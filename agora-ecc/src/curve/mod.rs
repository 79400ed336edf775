mod binary;
mod elliptic;
mod short_weierstrass;

pub use binary::BinaryCurve;
pub use elliptic::EllipticCurve;
pub use short_weierstrass::ShortWeierstrassCurve;

use crate::arithmetic::Modular;
use crate::{EccError, Point};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use std::fmt;

pub type Affine<E> = (E, E);

/// Group law of an elliptic curve over a finite field.
///
/// Implementors supply the curve equation and the affine addition formulas.
/// Identity handling and scalar multiplication are shared.
pub trait Curve: Clone + fmt::Debug {
    type Element: Modular + fmt::Debug;

    /// Interprets an integer as a coordinate, or `None` if it is not a
    /// canonical element of the underlying field.
    fn coordinate(&self, value: &BigUint) -> Option<Self::Element>;

    /// Both sides of the curve equation evaluated at `(x, y)`.
    fn equation(
        &self,
        x: &Self::Element,
        y: &Self::Element,
    ) -> Result<(Self::Element, Self::Element), EccError>;

    /// Adds two affine points already known to be on the curve.
    fn add_affine(
        &self,
        lhs: &Affine<Self::Element>,
        rhs: &Affine<Self::Element>,
    ) -> Result<Point, EccError>;

    fn negate(&self, point: &Point) -> Point;

    /// Number of elements of the underlying field.
    fn field_size(&self) -> BigUint;

    /// Collapses a point into the integer used as ECDH shared secret.
    fn shared_secret(&self, point: &Point) -> Option<BigUint>;

    fn is_on_curve(&self, point: &Point) -> bool {
        point.is_identity() || self.to_affine(point).is_ok()
    }

    /// Field coordinates of an affine point, rejecting points off the curve.
    fn to_affine(&self, point: &Point) -> Result<Affine<Self::Element>, EccError> {
        let (x, y) = point.coordinates().ok_or(EccError::InvalidPointFormat)?;
        let (x, y) = self
            .coordinate(x)
            .zip(self.coordinate(y))
            .ok_or(EccError::PointNotOnCurve)?;
        let (lhs, rhs) = self.equation(&x, &y)?;
        if lhs != rhs {
            return Err(EccError::PointNotOnCurve);
        }
        Ok((x, y))
    }

    fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point, EccError> {
        if lhs.is_identity() {
            return Ok(rhs.clone());
        }
        if rhs.is_identity() {
            return Ok(lhs.clone());
        }
        let lhs = self.to_affine(lhs)?;
        let rhs = self.to_affine(rhs)?;
        self.add_affine(&lhs, &rhs)
    }

    fn double(&self, point: &Point) -> Result<Point, EccError> {
        self.add_points(point, point)
    }

    /// Double-and-add, scanning the scalar from its least significant bit.
    fn scalar_mul(&self, point: &Point, scalar: &BigInt) -> Result<Point, EccError> {
        if point.is_identity() || scalar.is_zero() {
            return Ok(Point::Identity);
        }
        self.to_affine(point)?;
        let mut addend = if scalar.sign() == Sign::Minus {
            self.negate(point)
        } else {
            point.clone()
        };
        let mut bits = scalar.magnitude().clone();
        let mut result = Point::Identity;
        while !bits.is_zero() {
            if bits.bit(0) {
                result = self.add_points(&result, &addend)?;
            }
            bits >>= 1u32;
            if bits.is_zero() || addend.is_identity() {
                break;
            }
            addend = self.double(&addend)?;
        }
        Ok(result)
    }
}
