use num_bigint::BigUint;

use std::fmt;

/// Affine curve point or the point at infinity.
///
/// Coordinates are plain integers; they are only interpreted as field
/// elements by the curve they are passed to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Point {
    #[default]
    Identity,
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "O"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
