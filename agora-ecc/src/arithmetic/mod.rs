mod binary;
mod field;
mod modular;
mod prime;

pub use binary::BinaryFieldElement;
pub use field::FieldElement;
pub use modular::Modular;
pub use prime::PrimeFieldElement;
