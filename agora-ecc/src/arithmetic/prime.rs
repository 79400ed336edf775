use super::modular::Modular;
use crate::EccError;

use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Signed, Zero};

use std::fmt;

/// Element of the prime field GF(p).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeFieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl PrimeFieldElement {
    /// Reduces `value` modulo `modulus`.
    ///
    /// Panics if `modulus` is zero.
    pub fn new(value: BigUint, modulus: BigUint) -> Self {
        let reduced = if value < modulus {
            value
        } else {
            value % &modulus
        };
        Self {
            value: reduced,
            modulus,
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl Modular for PrimeFieldElement {
    fn inner(&self) -> &BigUint {
        &self.value
    }

    fn lift(&self, number: BigUint) -> Self {
        Self::new(number, self.modulus.clone())
    }

    fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    fn add(&self, other: &Self) -> Result<Self, EccError> {
        self.ensure_same_field(other)?;
        Ok(self.lift(&self.value + &other.value))
    }

    fn sub(&self, other: &Self) -> Result<Self, EccError> {
        self.ensure_same_field(other)?;
        Ok(self.lift(&self.value + &self.modulus - &other.value))
    }

    fn neg(&self) -> Self {
        self.lift(&self.modulus - &self.value)
    }

    fn mul(&self, other: &Self) -> Result<Self, EccError> {
        self.ensure_same_field(other)?;
        Ok(self.lift(&self.value * &other.value))
    }

    fn square(&self) -> Self {
        self.lift(&self.value * &self.value)
    }

    fn inverse(&self) -> Result<Self, EccError> {
        if self.value.is_zero() {
            return Err(EccError::NoInverse);
        }
        let modulus = BigInt::from(self.modulus.clone());
        let ExtendedGcd { gcd, x, .. } = BigInt::from(self.value.clone()).extended_gcd(&modulus);
        // NOTE a composite modulus may leave non-zero elements without an inverse
        if !gcd.is_one() {
            return Err(EccError::NoInverse);
        }
        let inverse = x.mod_floor(&modulus);
        debug_assert!(!inverse.is_negative());
        Ok(self.lift(inverse.magnitude().clone()))
    }

    fn pow(&self, exponent: &BigUint) -> Self {
        // Fermat's little theorem only holds for non-zero bases
        if self.value.is_zero() {
            return if exponent.is_zero() {
                self.one()
            } else {
                self.zero()
            };
        }
        let reduced = exponent % (&self.modulus - 1u32);
        self.lift(self.value.modpow(&reduced, &self.modulus))
    }
}
