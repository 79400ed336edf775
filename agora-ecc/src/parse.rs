use crate::arithmetic::Modular;
use crate::curve::{BinaryCurve, EllipticCurve, ShortWeierstrassCurve};
use crate::session::Domain;
use crate::{BigUint, EccError, Point};

use serde::{Deserialize, Serialize};

/// Affine generator as a pair of numeric strings.
pub type GeneratorConfig = (String, String);

/// Serializable curve domain.
///
/// Numbers are strings holding either a decimal or a `0x`-prefixed
/// hexadecimal integer, e.g.
///
/// ```json
/// {"field":"prime","a":"1","b":"1","modulus":"23","generator":["3","10"],"order":"28"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum CurveConfig {
    Prime(PrimeCurveConfig),
    Binary(BinaryCurveConfig),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeCurveConfig {
    pub a: String,
    pub b: String,
    pub modulus: String,
    pub generator: GeneratorConfig,
    pub order: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryCurveConfig {
    pub a: String,
    pub b: String,
    pub polynomial: String,
    pub degree: u64,
    pub generator: GeneratorConfig,
    pub order: String,
}

pub fn parse_number(number: &str) -> Result<BigUint, EccError> {
    let trimmed = number.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| EccError::InvalidParameter(format!("invalid number {:?}", number)))
}

fn parse_generator((x, y): &GeneratorConfig) -> Result<Point, EccError> {
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

fn hex(number: &BigUint) -> String {
    format!("{:#x}", number)
}

fn generator_config(generator: &Point) -> GeneratorConfig {
    match generator.coordinates() {
        Some((x, y)) => (hex(x), hex(y)),
        // a validated domain never holds the identity
        None => (String::new(), String::new()),
    }
}

impl TryFrom<PrimeCurveConfig> for Domain<ShortWeierstrassCurve> {
    type Error = EccError;
    fn try_from(config: PrimeCurveConfig) -> Result<Self, Self::Error> {
        let curve = ShortWeierstrassCurve::new(
            parse_number(&config.a)?,
            parse_number(&config.b)?,
            parse_number(&config.modulus)?,
        )?;
        Domain::new(
            curve,
            parse_generator(&config.generator)?,
            parse_number(&config.order)?,
        )
    }
}

impl TryFrom<BinaryCurveConfig> for Domain<BinaryCurve> {
    type Error = EccError;
    fn try_from(config: BinaryCurveConfig) -> Result<Self, Self::Error> {
        let curve = BinaryCurve::new(
            parse_number(&config.a)?,
            parse_number(&config.b)?,
            parse_number(&config.polynomial)?,
            config.degree,
        )?;
        Domain::new(
            curve,
            parse_generator(&config.generator)?,
            parse_number(&config.order)?,
        )
    }
}

impl TryFrom<CurveConfig> for Domain<ShortWeierstrassCurve> {
    type Error = EccError;
    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        match config {
            CurveConfig::Prime(config) => config.try_into(),
            CurveConfig::Binary(_) => Err(EccError::InvalidParameter(
                "expected a prime field curve".to_string(),
            )),
        }
    }
}

impl TryFrom<CurveConfig> for Domain<BinaryCurve> {
    type Error = EccError;
    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        match config {
            CurveConfig::Binary(config) => config.try_into(),
            CurveConfig::Prime(_) => Err(EccError::InvalidParameter(
                "expected a binary field curve".to_string(),
            )),
        }
    }
}

impl TryFrom<CurveConfig> for Domain<EllipticCurve> {
    type Error = EccError;
    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        match config {
            CurveConfig::Prime(config) => {
                Domain::<ShortWeierstrassCurve>::try_from(config).map(Into::into)
            }
            CurveConfig::Binary(config) => Domain::<BinaryCurve>::try_from(config).map(Into::into),
        }
    }
}

impl From<&Domain<ShortWeierstrassCurve>> for CurveConfig {
    fn from(domain: &Domain<ShortWeierstrassCurve>) -> Self {
        let curve = domain.curve();
        Self::Prime(PrimeCurveConfig {
            a: hex(curve.a().inner()),
            b: hex(curve.b().inner()),
            modulus: hex(curve.modulus()),
            generator: generator_config(domain.generator()),
            order: hex(domain.order()),
        })
    }
}

impl From<&Domain<BinaryCurve>> for CurveConfig {
    fn from(domain: &Domain<BinaryCurve>) -> Self {
        let curve = domain.curve();
        Self::Binary(BinaryCurveConfig {
            a: hex(curve.a().inner()),
            b: hex(curve.b().inner()),
            polynomial: hex(curve.polynomial()),
            degree: curve.degree(),
            generator: generator_config(domain.generator()),
            order: hex(domain.order()),
        })
    }
}
