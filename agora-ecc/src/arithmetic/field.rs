use super::{BinaryFieldElement, Modular, PrimeFieldElement};
use crate::EccError;

use num_bigint::BigUint;

use std::fmt;

/// Either kind of field element, for code that picks the field at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldElement {
    Prime(PrimeFieldElement),
    Binary(BinaryFieldElement),
}

impl From<PrimeFieldElement> for FieldElement {
    fn from(fe: PrimeFieldElement) -> Self {
        Self::Prime(fe)
    }
}

impl From<BinaryFieldElement> for FieldElement {
    fn from(fe: BinaryFieldElement) -> Self {
        Self::Binary(fe)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Prime(fe) => write!(f, "{}", fe),
            Self::Binary(fe) => write!(f, "{}", fe),
        }
    }
}

macro_rules! dispatch_binary_op {
    ($self:ident, $other:ident, $op:ident) => {
        match ($self, $other) {
            (Self::Prime(lhs), Self::Prime(rhs)) => lhs.$op(rhs).map(Self::Prime),
            (Self::Binary(lhs), Self::Binary(rhs)) => lhs.$op(rhs).map(Self::Binary),
            _ => Err(EccError::FieldMismatch),
        }
    };
}

impl Modular for FieldElement {
    fn inner(&self) -> &BigUint {
        match self {
            Self::Prime(fe) => fe.inner(),
            Self::Binary(fe) => fe.inner(),
        }
    }

    fn lift(&self, number: BigUint) -> Self {
        match self {
            Self::Prime(fe) => Self::Prime(fe.lift(number)),
            Self::Binary(fe) => Self::Binary(fe.lift(number)),
        }
    }

    fn same_field(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Prime(lhs), Self::Prime(rhs)) => lhs.same_field(rhs),
            (Self::Binary(lhs), Self::Binary(rhs)) => lhs.same_field(rhs),
            _ => false,
        }
    }

    fn add(&self, other: &Self) -> Result<Self, EccError> {
        dispatch_binary_op!(self, other, add)
    }

    fn sub(&self, other: &Self) -> Result<Self, EccError> {
        dispatch_binary_op!(self, other, sub)
    }

    fn neg(&self) -> Self {
        match self {
            Self::Prime(fe) => Self::Prime(fe.neg()),
            Self::Binary(fe) => Self::Binary(fe.neg()),
        }
    }

    fn mul(&self, other: &Self) -> Result<Self, EccError> {
        dispatch_binary_op!(self, other, mul)
    }

    fn square(&self) -> Self {
        match self {
            Self::Prime(fe) => Self::Prime(fe.square()),
            Self::Binary(fe) => Self::Binary(fe.square()),
        }
    }

    fn inverse(&self) -> Result<Self, EccError> {
        match self {
            Self::Prime(fe) => fe.inverse().map(Self::Prime),
            Self::Binary(fe) => fe.inverse().map(Self::Binary),
        }
    }

    fn pow(&self, exponent: &BigUint) -> Self {
        match self {
            Self::Prime(fe) => Self::Prime(fe.pow(exponent)),
            Self::Binary(fe) => Self::Binary(fe.pow(exponent)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dispatch_and_mismatch() {
        let p = FieldElement::from(PrimeFieldElement::new(
            BigUint::from(5u8),
            BigUint::from(23u8),
        ));
        let b = FieldElement::from(BinaryFieldElement::new(
            BigUint::from(5u8),
            BigUint::from(0b10011u8),
            4,
        ));
        assert_eq!(p.inner(), b.inner());
        assert_ne!(p, b);
        assert!(!p.same_field(&b));
        assert_eq!(p.add(&b), Err(EccError::FieldMismatch));
        assert_eq!(b.mul(&p), Err(EccError::FieldMismatch));

        // 5 + 5 = 10 in GF(23), 5 + 5 = 0 in GF(2^4)
        assert_eq!(p.add(&p).unwrap().inner(), &BigUint::from(10u8));
        assert!(b.add(&b).unwrap().is_zero());
        assert_eq!(p.mul(&p.inverse().unwrap()).unwrap(), p.one());
        assert_eq!(b.mul(&b.inverse().unwrap()).unwrap(), b.one());
    }
}
