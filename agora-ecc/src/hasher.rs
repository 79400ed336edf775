use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Maps arbitrary messages to integers below a field size.
pub struct MessageHasher<D: Digest = Sha256> {
    hasher: D,
}

impl<D: Digest> MessageHasher<D> {
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    pub fn insert(&mut self, message: &[u8]) {
        self.hasher.update(message);
    }

    /// Digest read as a big-endian integer.
    pub fn finalize(self) -> BigUint {
        BigUint::from_bytes_be(&self.hasher.finalize())
    }

    pub fn finalize_reduced(self, modulus: &BigUint) -> BigUint {
        self.finalize() % modulus
    }

    pub fn hash_to_field(message: &[u8], field_size: &BigUint) -> BigUint {
        let mut hasher = Self::new();
        hasher.insert(message);
        hasher.finalize_reduced(field_size)
    }
}

impl<D: Digest> Default for MessageHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sha3::Keccak256;

    #[test]
    fn sha256_test() {
        let expected = BigUint::parse_bytes(
            b"b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
            16,
        )
        .unwrap();
        let mut hasher = MessageHasher::<Sha256>::new();
        hasher.insert(b"hello ");
        hasher.insert(b"world");
        assert_eq!(hasher.finalize(), expected);

        assert_eq!(
            MessageHasher::<Sha256>::hash_to_field(b"hello world", &BigUint::from(23u8)),
            BigUint::from(9u8)
        );
        assert_eq!(
            MessageHasher::<Sha256>::hash_to_field(b"hello world", &BigUint::from(16u8)),
            BigUint::from(9u8)
        );
    }

    #[test]
    fn keccak_test() {
        let expected = BigUint::parse_bytes(
            b"47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad",
            16,
        )
        .unwrap();
        let mut hasher = MessageHasher::<Keccak256>::new();
        hasher.insert(b"hello world");
        assert_eq!(hasher.finalize(), expected);
    }
}
