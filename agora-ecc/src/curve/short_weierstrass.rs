use super::{Affine, Curve};
use crate::arithmetic::{Modular, PrimeFieldElement};
use crate::{EccError, Point};

use num_bigint::BigUint;

/// Curve `y^2 = x^3 + ax + b` over GF(p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortWeierstrassCurve {
    a: PrimeFieldElement,
    b: PrimeFieldElement,
}

impl ShortWeierstrassCurve {
    pub fn new(a: BigUint, b: BigUint, modulus: BigUint) -> Result<Self, EccError> {
        if modulus < BigUint::from(2u8) {
            return Err(EccError::InvalidParameter(format!(
                "prime modulus {} is less than 2",
                modulus
            )));
        }
        let a = PrimeFieldElement::new(a, modulus.clone());
        let b = PrimeFieldElement::new(b, modulus);

        // -16 * (4a^3 + 27b^2) must not vanish
        let four_a3 = a.lift(BigUint::from(4u8)).mul(&a.pow(&BigUint::from(3u8)))?;
        let twenty_seven_b2 = b.lift(BigUint::from(27u8)).mul(&b.square())?;
        let discriminant = a
            .lift(BigUint::from(16u8))
            .mul(&four_a3.add(&twenty_seven_b2)?)?
            .neg();
        if discriminant.is_zero() {
            return Err(EccError::SingularCurve);
        }

        tracing::trace!(a = %a.inner(), b = %b.inner(), p = %a.modulus(), "prime field curve");
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &PrimeFieldElement {
        &self.a
    }

    pub fn b(&self) -> &PrimeFieldElement {
        &self.b
    }

    pub fn modulus(&self) -> &BigUint {
        self.a.modulus()
    }
}

impl Curve for ShortWeierstrassCurve {
    type Element = PrimeFieldElement;

    fn coordinate(&self, value: &BigUint) -> Option<Self::Element> {
        (value < self.modulus()).then(|| self.a.lift(value.clone()))
    }

    fn equation(
        &self,
        x: &Self::Element,
        y: &Self::Element,
    ) -> Result<(Self::Element, Self::Element), EccError> {
        let lhs = y.square();
        let rhs = x
            .pow(&BigUint::from(3u8))
            .add(&self.a.mul(x)?)?
            .add(&self.b)?;
        Ok((lhs, rhs))
    }

    fn add_affine(
        &self,
        (x1, y1): &Affine<Self::Element>,
        (x2, y2): &Affine<Self::Element>,
    ) -> Result<Point, EccError> {
        if x1 == x2 && *y1 == y2.neg() {
            return Ok(Point::Identity);
        }

        let slope = if x1 == x2 && y1 == y2 {
            // tangent
            if y1.is_zero() {
                return Ok(Point::Identity);
            }
            let numerator = x1.square().mul(&x1.lift(BigUint::from(3u8)))?.add(&self.a)?;
            let denominator = y1.mul(&y1.lift(BigUint::from(2u8)))?;
            numerator.div(&denominator)?
        } else {
            // secant
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };

        let x3 = slope.square().sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(Point::new(x3.inner().clone(), y3.inner().clone()))
    }

    fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                let y = self.a.lift(y.clone()).neg();
                Point::new(x.clone(), y.inner().clone())
            }
        }
    }

    fn field_size(&self) -> BigUint {
        self.modulus().clone()
    }

    fn shared_secret(&self, point: &Point) -> Option<BigUint> {
        point.x().cloned()
    }
}
