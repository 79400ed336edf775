use crate::EccError;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Arithmetic shared by every finite field the curves are defined over.
///
/// Elements carry their own field context, so binary operations are
/// fallible: combining elements of different fields yields
/// [`EccError::FieldMismatch`]. Every operation returns a new,
/// normalized element.
pub trait Modular: Sized + Clone + PartialEq {
    fn inner(&self) -> &BigUint;

    /// Creates an element of the same field from an arbitrary integer.
    fn lift(&self, number: BigUint) -> Self;

    fn same_field(&self, other: &Self) -> bool;

    fn add(&self, other: &Self) -> Result<Self, EccError>;

    fn sub(&self, other: &Self) -> Result<Self, EccError>;

    fn neg(&self) -> Self;

    fn mul(&self, other: &Self) -> Result<Self, EccError>;

    fn inverse(&self) -> Result<Self, EccError>;

    fn pow(&self, exponent: &BigUint) -> Self;

    fn square(&self) -> Self;

    fn div(&self, other: &Self) -> Result<Self, EccError> {
        self.mul(&other.inverse()?)
    }

    fn is_zero(&self) -> bool {
        self.inner().is_zero()
    }

    fn zero(&self) -> Self {
        self.lift(BigUint::zero())
    }

    fn one(&self) -> Self {
        self.lift(BigUint::one())
    }

    fn ensure_same_field(&self, other: &Self) -> Result<(), EccError> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(EccError::FieldMismatch)
        }
    }
}
