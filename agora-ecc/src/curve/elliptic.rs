use super::{Affine, BinaryCurve, Curve, ShortWeierstrassCurve};
use crate::arithmetic::FieldElement;
use crate::{EccError, Point};

use num_bigint::BigUint;

/// Either curve family, chosen at runtime (e.g. from configuration).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EllipticCurve {
    ShortWeierstrass(ShortWeierstrassCurve),
    Binary(BinaryCurve),
}

impl From<ShortWeierstrassCurve> for EllipticCurve {
    fn from(curve: ShortWeierstrassCurve) -> Self {
        Self::ShortWeierstrass(curve)
    }
}

impl From<BinaryCurve> for EllipticCurve {
    fn from(curve: BinaryCurve) -> Self {
        Self::Binary(curve)
    }
}

fn wrap<E: Into<FieldElement>>((lhs, rhs): (E, E)) -> (FieldElement, FieldElement) {
    (lhs.into(), rhs.into())
}

impl Curve for EllipticCurve {
    type Element = FieldElement;

    fn coordinate(&self, value: &BigUint) -> Option<Self::Element> {
        match self {
            Self::ShortWeierstrass(curve) => curve.coordinate(value).map(FieldElement::Prime),
            Self::Binary(curve) => curve.coordinate(value).map(FieldElement::Binary),
        }
    }

    fn equation(
        &self,
        x: &Self::Element,
        y: &Self::Element,
    ) -> Result<(Self::Element, Self::Element), EccError> {
        match (self, x, y) {
            (Self::ShortWeierstrass(curve), FieldElement::Prime(x), FieldElement::Prime(y)) => {
                curve.equation(x, y).map(wrap)
            }
            (Self::Binary(curve), FieldElement::Binary(x), FieldElement::Binary(y)) => {
                curve.equation(x, y).map(wrap)
            }
            _ => Err(EccError::FieldMismatch),
        }
    }

    fn add_affine(
        &self,
        lhs: &Affine<Self::Element>,
        rhs: &Affine<Self::Element>,
    ) -> Result<Point, EccError> {
        use FieldElement::{Binary, Prime};
        match (self, lhs, rhs) {
            (Self::ShortWeierstrass(curve), (Prime(x1), Prime(y1)), (Prime(x2), Prime(y2))) => {
                curve.add_affine(&(x1.clone(), y1.clone()), &(x2.clone(), y2.clone()))
            }
            (Self::Binary(curve), (Binary(x1), Binary(y1)), (Binary(x2), Binary(y2))) => {
                curve.add_affine(&(x1.clone(), y1.clone()), &(x2.clone(), y2.clone()))
            }
            _ => Err(EccError::FieldMismatch),
        }
    }

    fn negate(&self, point: &Point) -> Point {
        match self {
            Self::ShortWeierstrass(curve) => curve.negate(point),
            Self::Binary(curve) => curve.negate(point),
        }
    }

    fn field_size(&self) -> BigUint {
        match self {
            Self::ShortWeierstrass(curve) => curve.field_size(),
            Self::Binary(curve) => curve.field_size(),
        }
    }

    fn shared_secret(&self, point: &Point) -> Option<BigUint> {
        match self {
            Self::ShortWeierstrass(curve) => curve.shared_secret(point),
            Self::Binary(curve) => curve.shared_secret(point),
        }
    }

    // NOTE delegate so that coordinates are only converted once
    fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point, EccError> {
        match self {
            Self::ShortWeierstrass(curve) => curve.add_points(lhs, rhs),
            Self::Binary(curve) => curve.add_points(lhs, rhs),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::{Modular, PrimeFieldElement};

    use num_bigint::BigInt;

    #[test]
    fn dispatches_to_the_wrapped_curve() {
        let prime = ShortWeierstrassCurve::new(1u8.into(), 1u8.into(), 23u8.into()).unwrap();
        let binary = BinaryCurve::new(1u8.into(), 1u8.into(), 0b10011u8.into(), 4).unwrap();
        let any_prime = EllipticCurve::from(prime.clone());
        let any_binary = EllipticCurve::from(binary.clone());

        let g = Point::new(3u8, 10u8);
        assert!(any_prime.is_on_curve(&g));
        assert_eq!(
            any_prime.scalar_mul(&g, &BigInt::from(3)).unwrap(),
            prime.scalar_mul(&g, &BigInt::from(3)).unwrap()
        );
        assert_eq!(any_prime.negate(&g), prime.negate(&g));

        let h = Point::new(8u8, 2u8);
        assert!(any_binary.is_on_curve(&h));
        assert!(!any_binary.is_on_curve(&g));
        assert_eq!(any_binary.double(&h).unwrap(), Point::new(6u8, 7u8));
        assert_eq!(any_binary.field_size(), BigUint::from(16u8));
        assert_eq!(
            any_binary.shared_secret(&Point::new(6u8, 7u8)),
            binary.shared_secret(&Point::new(6u8, 7u8))
        );
    }

    #[test]
    fn elements_of_the_wrong_field_are_rejected() {
        let binary = EllipticCurve::from(
            BinaryCurve::new(1u8.into(), 1u8.into(), 0b10011u8.into(), 4).unwrap(),
        );
        let x = FieldElement::from(PrimeFieldElement::new(3u8.into(), 23u8.into()));
        let y = x.lift(10u8.into());
        assert_eq!(binary.equation(&x, &y), Err(EccError::FieldMismatch));
        assert_eq!(
            binary.add_affine(&(x.clone(), y.clone()), &(x, y)),
            Err(EccError::FieldMismatch)
        );
    }
}
