use super::modular::Modular;
use crate::EccError;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use std::fmt;

/// Element of the binary extension field GF(2^n).
///
/// The value holds the coefficients of a polynomial over GF(2), least
/// significant bit first, always reduced below the irreducible polynomial
/// so that it fits in `degree` bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryFieldElement {
    value: BigUint,
    polynomial: BigUint,
    degree: u64,
}

impl BinaryFieldElement {
    /// Panics if `polynomial` is zero.
    pub fn new(value: BigUint, polynomial: BigUint, degree: u64) -> Self {
        assert!(!polynomial.is_zero(), "zero irreducible polynomial");
        Self {
            value: reduce(value, &polynomial),
            polynomial,
            degree,
        }
    }

    pub fn polynomial(&self) -> &BigUint {
        &self.polynomial
    }

    pub fn degree(&self) -> u64 {
        self.degree
    }

    /// Carry-less shift-and-add multiplication, reducing whenever the
    /// running multiplicand reaches `degree` bits.
    fn carryless_mul(&self, other: &BigUint) -> BigUint {
        let mut multiplicand = self.value.clone();
        let mut multiplier = other.clone();
        let mut product = BigUint::zero();
        while !multiplier.is_zero() {
            if multiplier.bit(0) {
                product ^= &multiplicand;
            }
            multiplicand <<= 1u32;
            if multiplicand.bit(self.degree) {
                multiplicand ^= &self.polynomial;
            }
            multiplier >>= 1u32;
        }
        product
    }
}

/// Polynomial remainder of `value` modulo `polynomial` over GF(2).
fn reduce(mut value: BigUint, polynomial: &BigUint) -> BigUint {
    let poly_bits = polynomial.bits();
    while value.bits() >= poly_bits {
        let shift = value.bits() - poly_bits;
        value ^= polynomial << shift;
    }
    value
}

impl fmt::Display for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b} (GF(2^{}))", self.value, self.degree)
    }
}

impl Modular for BinaryFieldElement {
    fn inner(&self) -> &BigUint {
        &self.value
    }

    fn lift(&self, number: BigUint) -> Self {
        Self {
            value: reduce(number, &self.polynomial),
            polynomial: self.polynomial.clone(),
            degree: self.degree,
        }
    }

    fn same_field(&self, other: &Self) -> bool {
        self.polynomial == other.polynomial && self.degree == other.degree
    }

    fn add(&self, other: &Self) -> Result<Self, EccError> {
        self.ensure_same_field(other)?;
        Ok(self.lift(&self.value ^ &other.value))
    }

    // characteristic two: subtraction is addition
    fn sub(&self, other: &Self) -> Result<Self, EccError> {
        self.add(other)
    }

    fn neg(&self) -> Self {
        self.clone()
    }

    fn mul(&self, other: &Self) -> Result<Self, EccError> {
        self.ensure_same_field(other)?;
        Ok(self.lift(self.carryless_mul(&other.value)))
    }

    fn square(&self) -> Self {
        self.lift(self.carryless_mul(&self.value))
    }

    /// Extended Euclidean algorithm over GF(2)[X].
    fn inverse(&self) -> Result<Self, EccError> {
        if self.value.is_zero() {
            return Err(EccError::NoInverse);
        }
        let mut r0 = self.polynomial.clone();
        let mut r1 = self.value.clone();
        let mut s0 = BigUint::zero();
        let mut s1 = BigUint::one();
        while !r1.is_zero() {
            while r0.bits() >= r1.bits() {
                let shift = r0.bits() - r1.bits();
                r0 ^= &r1 << shift;
                s0 ^= &s1 << shift;
            }
            std::mem::swap(&mut r0, &mut r1);
            std::mem::swap(&mut s0, &mut s1);
        }
        // r0 holds gcd(value, polynomial), which is one for an irreducible modulus
        if !r0.is_one() {
            return Err(EccError::NoInverse);
        }
        Ok(self.lift(s0))
    }

    fn pow(&self, exponent: &BigUint) -> Self {
        let mut result = self.one();
        let mut base = self.clone();
        for i in 0..exponent.bits() {
            if exponent.bit(i) {
                result = result.lift(result.carryless_mul(&base.value));
            }
            base = base.square();
        }
        result
    }
}
