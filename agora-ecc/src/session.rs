use crate::curve::{BinaryCurve, Curve, EllipticCurve, ShortWeierstrassCurve};
use crate::keypair::{random_scalar, Keypair};
use crate::{EccError, MessageHasher, Point};

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use std::marker::PhantomData;

/// Ephemeral keys drawn by `encrypt` before giving up.
pub const MAX_ENCRYPTION_ATTEMPTS: usize = 10;
/// Private keys drawn by `generate_keypair` before giving up.
pub const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// Curve together with a base point `G` of order `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<C> {
    curve: C,
    generator: Point,
    order: BigUint,
}

impl<C: Curve> Domain<C> {
    pub fn new(curve: C, generator: Point, order: BigUint) -> Result<Self, EccError> {
        if generator.is_identity() {
            return Err(EccError::InvalidParameter(
                "generator is the point at infinity".to_string(),
            ));
        }
        if !curve.is_on_curve(&generator) {
            return Err(EccError::PointNotOnCurve);
        }
        if order <= BigUint::one() {
            return Err(EccError::InvalidParameter(format!(
                "generator order {} is less than 2",
                order
            )));
        }
        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }
}

impl From<Domain<ShortWeierstrassCurve>> for Domain<EllipticCurve> {
    fn from(domain: Domain<ShortWeierstrassCurve>) -> Self {
        Self {
            curve: domain.curve.into(),
            generator: domain.generator,
            order: domain.order,
        }
    }
}

impl From<Domain<BinaryCurve>> for Domain<EllipticCurve> {
    fn from(domain: Domain<BinaryCurve>) -> Self {
        Self {
            curve: domain.curve.into(),
            generator: domain.generator,
            order: domain.order,
        }
    }
}

/// Output of [`Session::encrypt`]: the ephemeral public point `R` and
/// the masked message `C2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub ephemeral: Point,
    pub masked: BigUint,
}

/// One party of an ECDH / ECIES-style exchange.
///
/// A session is configured in steps: the curve domain first, then the own
/// key pair and the recipient's public key, in any order. Operations that
/// need a missing piece fail with the matching [`EccError`].
///
/// The encryption masks the hash of the plaintext (reduced to the field
/// size), so `decrypt` recovers that integer in decimal form and never the
/// original text.
pub struct Session<C, D = Sha256> {
    domain: Option<Domain<C>>,
    keypair: Option<Keypair>,
    recipient: Option<Point>,
    _digest: PhantomData<D>,
}

/// Session over a prime field curve.
pub type EccGfp = Session<ShortWeierstrassCurve>;
/// Session over a binary field curve.
pub type EccGf2n = Session<BinaryCurve>;

impl<C: Curve, D: Digest> Default for Session<C, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Curve, D: Digest> Session<C, D> {
    pub fn new() -> Self {
        Self {
            domain: None,
            keypair: None,
            recipient: None,
            _digest: PhantomData,
        }
    }

    pub fn with_domain(domain: Domain<C>) -> Self {
        let mut session = Self::new();
        session.set_domain(domain);
        session
    }

    pub fn set_domain(&mut self, domain: Domain<C>) {
        tracing::trace!(generator = %domain.generator, order = %domain.order, "session domain set");
        self.domain = Some(domain);
    }

    pub fn domain(&self) -> Option<&Domain<C>> {
        self.domain.as_ref()
    }

    pub fn curve(&self) -> Option<&C> {
        self.domain.as_ref().map(Domain::curve)
    }

    pub fn generator(&self) -> Option<&Point> {
        self.domain.as_ref().map(Domain::generator)
    }

    pub fn order(&self) -> Option<&BigUint> {
        self.domain.as_ref().map(Domain::order)
    }

    pub fn keypair(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }

    pub fn public_key(&self) -> Option<&Point> {
        self.keypair.as_ref().map(|keypair| &keypair.public)
    }

    pub fn recipient_key(&self) -> Option<&Point> {
        self.recipient.as_ref()
    }

    fn configured(&self) -> Result<&Domain<C>, EccError> {
        self.domain.as_ref().ok_or(EccError::CurveNotConfigured)
    }

    /// Draws a private scalar in `[1, n - 1]` and stores the resulting
    /// key pair, redrawing while the public point is the identity.
    pub fn generate_keypair<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Keypair, EccError> {
        let domain = self.configured()?;
        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            let keypair = Keypair::random(rng, &domain.curve, &domain.generator, &domain.order)?;
            if keypair.public.is_identity() {
                tracing::debug!(attempt, "public key is the point at infinity, redrawing");
                continue;
            }
            self.keypair = Some(keypair.clone());
            return Ok(keypair);
        }
        Err(EccError::KeyGenerationFailed)
    }

    /// ECDH: `private * other_public`, collapsed to an integer.
    ///
    /// A degenerate product (the identity) yields the value `1`.
    pub fn compute_shared_secret(
        &self,
        private: &BigUint,
        other_public: &Point,
    ) -> Result<BigUint, EccError> {
        let domain = self.configured()?;
        if other_public.is_identity() {
            return Err(EccError::InvalidPublicKey);
        }
        let shared = domain
            .curve
            .scalar_mul(other_public, &BigInt::from(private.clone()))?;
        match domain.curve.shared_secret(&shared) {
            Some(secret) => Ok(secret),
            None => {
                tracing::warn!("shared secret is the point at infinity, using 1 instead");
                Ok(BigUint::one())
            }
        }
    }

    pub fn set_recipient_key(&mut self, recipient: Point) -> Result<(), EccError> {
        if recipient.is_identity() {
            return Err(EccError::InvalidPointFormat);
        }
        self.recipient = Some(recipient);
        Ok(())
    }

    /// The integer that `encrypt` masks for `plaintext`: its digest reduced
    /// modulo the field size.
    pub fn message_representative(&self, plaintext: impl AsRef<[u8]>) -> Result<BigUint, EccError> {
        let domain = self.configured()?;
        Ok(MessageHasher::<D>::hash_to_field(
            plaintext.as_ref(),
            &domain.curve.field_size(),
        ))
    }

    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: impl AsRef<[u8]>,
    ) -> Result<Ciphertext, EccError> {
        let domain = self.configured()?;
        let recipient = self.recipient.as_ref().ok_or(EccError::RecipientKeyNotSet)?;
        let message = self.message_representative(plaintext)?;

        for attempt in 1..=MAX_ENCRYPTION_ATTEMPTS {
            let k = BigInt::from(random_scalar(rng, &domain.order));
            let ephemeral = domain.curve.scalar_mul(&domain.generator, &k)?;
            let shared = domain.curve.scalar_mul(recipient, &k)?;
            match domain.curve.shared_secret(&shared) {
                Some(secret) => {
                    return Ok(Ciphertext {
                        ephemeral,
                        masked: &message ^ &secret,
                    })
                }
                None => {
                    tracing::debug!(attempt, "ephemeral shared secret is the point at infinity")
                }
            }
        }
        Err(EccError::EncryptionFailed)
    }

    /// Unmasks `ciphertext` with the own private key, returning the hashed
    /// message representative as a decimal string.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String, EccError> {
        let domain = self.configured()?;
        let keypair = self.keypair.as_ref().ok_or(EccError::PrivateKeyNotSet)?;

        let shared = domain.curve.scalar_mul(
            &ciphertext.ephemeral,
            &BigInt::from(keypair.private.clone()),
        )?;
        let secret = domain
            .curve
            .shared_secret(&shared)
            .ok_or(EccError::DecryptionFailed)?;
        Ok((&ciphertext.masked ^ &secret).to_string())
    }
}

impl<D: Digest> Session<ShortWeierstrassCurve, D> {
    /// Configures the curve `y^2 = x^3 + ax + b` over GF(`modulus`) with
    /// base point `generator` of order `order`.
    pub fn set_curve(
        &mut self,
        a: BigUint,
        b: BigUint,
        modulus: BigUint,
        generator: Point,
        order: BigUint,
    ) -> Result<(), EccError> {
        let curve = ShortWeierstrassCurve::new(a, b, modulus)?;
        self.set_domain(Domain::new(curve, generator, order)?);
        Ok(())
    }
}

impl<D: Digest> Session<BinaryCurve, D> {
    /// Configures the curve `y^2 + xy = x^3 + ax^2 + b` over
    /// GF(2^`degree`) defined by `polynomial`, with base point `generator`
    /// of order `order`.
    pub fn set_curve(
        &mut self,
        a: BigUint,
        b: BigUint,
        polynomial: BigUint,
        degree: u64,
        generator: Point,
        order: BigUint,
    ) -> Result<(), EccError> {
        let curve = BinaryCurve::new(a, b, polynomial, degree)?;
        self.set_domain(Domain::new(curve, generator, order)?);
        Ok(())
    }
}
