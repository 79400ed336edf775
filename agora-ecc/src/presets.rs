//! Ready-made curve domains.
use crate::parse::{BinaryCurveConfig, CurveConfig, PrimeCurveConfig};

fn generator(x: &str, y: &str) -> (String, String) {
    (x.to_string(), y.to_string())
}

/// `y^2 = x^3 + x + 1` over GF(23) with a generator of order 28.
pub fn toy_prime() -> CurveConfig {
    CurveConfig::Prime(PrimeCurveConfig {
        a: "1".to_string(),
        b: "1".to_string(),
        modulus: "23".to_string(),
        generator: generator("3", "10"),
        order: "28".to_string(),
    })
}

/// `y^2 + xy = x^3 + x^2 + 1` over GF(2^4) defined by `x^4 + x + 1`,
/// with a generator of order 16.
pub fn toy_binary() -> CurveConfig {
    CurveConfig::Binary(BinaryCurveConfig {
        a: "1".to_string(),
        b: "1".to_string(),
        polynomial: "0x13".to_string(),
        degree: 4,
        generator: generator("0x8", "0x2"),
        order: "16".to_string(),
    })
}

pub fn secp256k1() -> CurveConfig {
    CurveConfig::Prime(PrimeCurveConfig {
        a: "0".to_string(),
        b: "7".to_string(),
        modulus: "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f".to_string(),
        generator: generator(
            "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        ),
        order: "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141".to_string(),
    })
}

/// Koblitz curve K-163 over GF(2^163) defined by `x^163 + x^7 + x^6 + x^3 + 1`.
pub fn sect163k1() -> CurveConfig {
    CurveConfig::Binary(BinaryCurveConfig {
        a: "1".to_string(),
        b: "1".to_string(),
        polynomial: "0x800000000000000000000000000000000000000c9".to_string(),
        degree: 163,
        generator: generator(
            "0x02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8",
            "0x0289070fb05d38ff58321f2e800536d538ccdaa3d9",
        ),
        order: "0x04000000000000000000020108a2e0cc0d99f8a5ef".to_string(),
    })
}
