use crate::curve::Curve;
use crate::{EccError, Point};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;
use rand_core::{CryptoRng, RngCore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair {
    pub private: BigUint,
    pub public: Point,
}

impl Keypair {
    /// Derives the public point `private * generator`.
    pub fn from_private<C: Curve>(
        curve: &C,
        generator: &Point,
        private: BigUint,
    ) -> Result<Self, EccError> {
        let public = curve.scalar_mul(generator, &BigInt::from(private.clone()))?;
        Ok(Self { private, public })
    }

    /// Draws the private scalar uniformly from `[1, order - 1]`.
    pub fn random<C: Curve, R: RngCore + CryptoRng>(
        rng: &mut R,
        curve: &C,
        generator: &Point,
        order: &BigUint,
    ) -> Result<Self, EccError> {
        Self::from_private(curve, generator, random_scalar(rng, order))
    }
}

/// Uniform scalar in `[1, order - 1]`; `order` must be at least 2.
pub(crate) fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R, order: &BigUint) -> BigUint {
    rng.gen_biguint_range(&BigUint::one(), order)
}
