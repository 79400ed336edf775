#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod curve;
mod hasher;
pub mod keypair;
pub mod parse;
mod point;
pub mod presets;
pub mod session;

pub use hasher::MessageHasher;
pub use keypair::Keypair;
pub use num_bigint::{BigInt, BigUint};
pub use point::Point;
pub use session::{Ciphertext, Domain, EccGf2n, EccGfp, Session};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EccError {
    #[error("operands belong to different fields")]
    FieldMismatch,
    #[error("attempted to invert the zero element")]
    NoInverse,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("expected an affine coordinate pair")]
    InvalidPointFormat,
    #[error("the curve is singular")]
    SingularCurve,
    #[error("curve parameters must be set first")]
    CurveNotConfigured,
    #[error("recipient public key must be set before encryption")]
    RecipientKeyNotSet,
    #[error("private key must be generated before decryption")]
    PrivateKeyNotSet,
    #[error("invalid public key: point at infinity")]
    InvalidPublicKey,
    #[error("could not draw a key pair with a non-identity public point")]
    KeyGenerationFailed,
    #[error("could not compute a valid shared secret")]
    EncryptionFailed,
    #[error("derived shared secret is the point at infinity")]
    DecryptionFailed,
    #[error("point order exceeds the search bound {0}")]
    OrderNotFound(BigUint),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
