use super::{Affine, Curve};
use crate::arithmetic::{BinaryFieldElement, Modular};
use crate::{EccError, Point};

use num_bigint::BigUint;
use num_traits::One;

/// Non-supersingular curve `y^2 + xy = x^3 + ax^2 + b` over GF(2^n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryCurve {
    a: BinaryFieldElement,
    b: BinaryFieldElement,
}

impl BinaryCurve {
    pub fn new(
        a: BigUint,
        b: BigUint,
        polynomial: BigUint,
        degree: u64,
    ) -> Result<Self, EccError> {
        if degree == 0 || polynomial.bits() != degree + 1 {
            return Err(EccError::InvalidParameter(format!(
                "polynomial {:#b} is not of degree {}",
                polynomial, degree
            )));
        }
        let a = BinaryFieldElement::new(a, polynomial.clone(), degree);
        let b = BinaryFieldElement::new(b, polynomial, degree);
        if b.is_zero() {
            return Err(EccError::SingularCurve);
        }

        tracing::trace!(a = %a.inner(), b = %b.inner(), degree, "binary field curve");
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &BinaryFieldElement {
        &self.a
    }

    pub fn b(&self) -> &BinaryFieldElement {
        &self.b
    }

    pub fn polynomial(&self) -> &BigUint {
        self.a.polynomial()
    }

    pub fn degree(&self) -> u64 {
        self.a.degree()
    }

    /// Order of `point` by repeated addition.
    ///
    /// Stops when the running sum reaches the identity or returns to
    /// `point`. Takes O(order) additions, so only usable on small curves.
    pub fn point_order(&self, point: &Point) -> Result<BigUint, EccError> {
        if point.is_identity() {
            return Ok(BigUint::one());
        }
        if !self.is_on_curve(point) {
            return Err(EccError::PointNotOnCurve);
        }

        let bound = (BigUint::one() << self.degree()) + 1u32;
        let mut current = point.clone();
        let mut order = BigUint::one();
        while order <= bound {
            order += 1u32;
            current = self.add_points(&current, point)?;
            if current.is_identity() {
                tracing::debug!(%point, %order, "computed point order");
                return Ok(order);
            }
            if current == *point {
                tracing::debug!(%point, %order, "cycle detected during order search");
                return Ok(order);
            }
        }
        Err(EccError::OrderNotFound(bound))
    }
}

impl Curve for BinaryCurve {
    type Element = BinaryFieldElement;

    fn coordinate(&self, value: &BigUint) -> Option<Self::Element> {
        (value.bits() <= self.degree()).then(|| self.a.lift(value.clone()))
    }

    fn equation(
        &self,
        x: &Self::Element,
        y: &Self::Element,
    ) -> Result<(Self::Element, Self::Element), EccError> {
        let x2 = x.square();
        let lhs = y.square().add(&x.mul(y)?)?;
        let rhs = x2.mul(x)?.add(&self.a.mul(&x2)?)?.add(&self.b)?;
        Ok((lhs, rhs))
    }

    fn add_affine(
        &self,
        (x1, y1): &Affine<Self::Element>,
        (x2, y2): &Affine<Self::Element>,
    ) -> Result<Point, EccError> {
        let (x3, y3) = if x1 == x2 {
            // -(x, y) = (x, x + y), and points with x = 0 are their own inverse
            // NOTE y1 = 0 alone does not make a point self-inverse here
            if x1.is_zero() || *y2 == x1.add(y1)? {
                return Ok(Point::Identity);
            }
            let lambda = x1.add(&y1.div(x1)?)?;
            let x3 = lambda.square().add(&lambda)?.add(&self.a)?;
            let y3 = x1.square().add(&lambda.mul(&x3)?)?.add(&x3)?;
            (x3, y3)
        } else {
            let lambda = y1.add(y2)?.div(&x1.add(x2)?)?;
            let x3 = lambda
                .square()
                .add(&lambda)?
                .add(x1)?
                .add(x2)?
                .add(&self.a)?;
            let y3 = lambda.mul(&x1.add(&x3)?)?.add(&x3)?.add(y1)?;
            (x3, y3)
        };
        Ok(Point::new(x3.inner().clone(), y3.inner().clone()))
    }

    fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x.clone(), x ^ y),
        }
    }

    fn field_size(&self) -> BigUint {
        BigUint::one() << self.degree()
    }

    fn shared_secret(&self, point: &Point) -> Option<BigUint> {
        point
            .coordinates()
            .map(|(x, y)| (x << self.degree()) | y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::test::check_group_laws;

    use num_bigint::BigInt;

    // y^2 + xy = x^3 + x^2 + 1 over GF(2^4) = GF(2)[X] / (X^4 + X + 1)
    fn toy_curve() -> BinaryCurve {
        BinaryCurve::new(1u8.into(), 1u8.into(), 0b10011u8.into(), 4).unwrap()
    }

    fn satisfies_equation(x: u32, y: u32) -> bool {
        // direct evaluation with the shift-and-xor multiplication
        fn mul(mut a: u32, mut b: u32) -> u32 {
            let mut product = 0;
            while b != 0 {
                if b & 1 == 1 {
                    product ^= a;
                }
                a <<= 1;
                if a & 0b10000 != 0 {
                    a ^= 0b10011;
                }
                b >>= 1;
            }
            product
        }
        let lhs = mul(y, y) ^ mul(x, y);
        let rhs = mul(mul(x, x), x) ^ mul(x, x) ^ 1;
        lhs == rhs
    }

    fn all_points(curve: &BinaryCurve) -> Vec<Point> {
        (0u32..16)
            .flat_map(|x| (0u32..16).map(move |y| Point::new(x, y)))
            .filter(|p| curve.is_on_curve(p))
            .collect()
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            BinaryCurve::new(1u8.into(), 0u8.into(), 0b10011u8.into(), 4),
            Err(EccError::SingularCurve)
        );
        assert!(matches!(
            BinaryCurve::new(1u8.into(), 1u8.into(), 0b10011u8.into(), 5),
            Err(EccError::InvalidParameter(_))
        ));
        assert!(matches!(
            BinaryCurve::new(1u8.into(), 1u8.into(), 0u8.into(), 0),
            Err(EccError::InvalidParameter(_))
        ));
    }

    #[test]
    fn membership_matches_equation() {
        let curve = toy_curve();
        let mut count = 0;
        for x in 0u32..16 {
            for y in 0u32..16 {
                let expected = satisfies_equation(x, y);
                assert_eq!(curve.is_on_curve(&Point::new(x, y)), expected, "({}, {})", x, y);
                if expected {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 15);
        assert!(curve.is_on_curve(&Point::Identity));
        assert!(!curve.is_on_curve(&Point::new(16u8, 1u8)));
        assert_eq!(all_points(&curve).len(), 15);
    }

    #[test]
    fn doubling_and_addition() {
        let curve = toy_curve();
        let g = Point::new(0b1000u8, 0b0010u8);

        // lambda = x + y / x = 8 + 2 * 8^-1 = 8 + 2 * 15 = 8 + 13 = 5
        // x2 = lambda^2 + lambda + a = 2 + 5 + 1 = 6
        // y2 = x^2 + lambda * x2 + x2 = 12 + 13 + 6 = 7
        let g2 = curve.double(&g).unwrap();
        assert_eq!(g2, Point::new(6u8, 7u8));

        let g3 = curve.add_points(&g, &g2).unwrap();
        assert_eq!(g3, Point::new(10u8, 5u8));
        assert_eq!(curve.scalar_mul(&g, &BigInt::from(2)).unwrap(), g2);
        assert_eq!(curve.scalar_mul(&g, &BigInt::from(3)).unwrap(), g3);
        assert_eq!(
            curve.scalar_mul(&g, &BigInt::from(16)).unwrap(),
            Point::Identity
        );
        assert_eq!(
            curve.scalar_mul(&g, &BigInt::from(-1)).unwrap(),
            Point::new(8u8, 10u8)
        );
    }

    #[test]
    fn point_with_zero_x_is_its_own_inverse() {
        let curve = toy_curve();
        let p = Point::new(0u8, 1u8);
        assert_eq!(curve.negate(&p), p);
        assert_eq!(curve.double(&p).unwrap(), Point::Identity);
    }

    #[test]
    fn group_laws() {
        let curve = toy_curve();
        check_group_laws(&curve, &all_points(&curve));
    }

    #[test]
    fn point_orders() {
        let curve = toy_curve();
        assert_eq!(curve.point_order(&Point::Identity).unwrap(), BigUint::from(1u8));
        assert_eq!(curve.point_order(&Point::new(0u8, 1u8)).unwrap(), BigUint::from(2u8));
        assert_eq!(curve.point_order(&Point::new(1u8, 6u8)).unwrap(), BigUint::from(4u8));
        assert_eq!(curve.point_order(&Point::new(6u8, 1u8)).unwrap(), BigUint::from(8u8));
        assert_eq!(curve.point_order(&Point::new(8u8, 2u8)).unwrap(), BigUint::from(16u8));
        assert_eq!(
            curve.point_order(&Point::new(8u8, 3u8)),
            Err(EccError::PointNotOnCurve)
        );
        for p in all_points(&curve) {
            let order = curve.point_order(&p).unwrap();
            assert_eq!(
                curve.scalar_mul(&p, &order.into()).unwrap(),
                Point::Identity
            );
        }
    }

    #[test]
    fn order_search_is_bounded() {
        // (1, 0) has order 22 on y^2 + xy = x^3 + 15x^2 + 14, above 2^4 + 1
        let curve = BinaryCurve::new(15u8.into(), 14u8.into(), 0b10011u8.into(), 4).unwrap();
        let p = Point::new(1u8, 0u8);
        assert!(curve.is_on_curve(&p));
        assert_eq!(
            curve.point_order(&p),
            Err(EccError::OrderNotFound(17u8.into()))
        );
        assert_eq!(
            curve.scalar_mul(&p, &BigInt::from(22)).unwrap(),
            Point::Identity
        );
    }

    #[test]
    fn shared_secret_concatenates_coordinates() {
        let curve = toy_curve();
        assert_eq!(
            curve.shared_secret(&Point::new(0b0110u8, 0b0111u8)),
            Some(BigUint::from(0b0110_0111u8))
        );
        assert_eq!(curve.shared_secret(&Point::Identity), None);
        assert_eq!(curve.field_size(), BigUint::from(16u8));
    }
}
