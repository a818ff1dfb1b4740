use digest::Digest;
use md5::Md5;
use sha2::Sha256;

/// RSA key types
pub mod rsa;

pub use self::rsa::{RsaKeyPair, RsaPublicKey};

/// An enum representing the hash function used to generate fingerprint
///
/// # Hash Algorithm
/// MD5: Only kept because older ACME clients derive their account id from it.
///
/// SHA2-256: The account id of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintHash {
    MD5,
    SHA256,
}

impl FingerprintHash {
    /// Hash the data with the selected algorithm
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        fn digest_hash<D: Digest>(hasher: &mut D, data: &[u8]) -> Vec<u8> {
            hasher.update(data);
            hasher.finalize_reset().to_vec()
        }
        match self {
            FingerprintHash::MD5 => digest_hash(&mut Md5::default(), data),
            FingerprintHash::SHA256 => digest_hash(&mut Sha256::default(), data),
        }
    }

    /// Hash the data and return the digest in lowercase hex
    pub fn hex(self, data: &[u8]) -> String {
        hex::encode(self.hash(data))
    }
}

/// The account identifiers derived from a public key PEM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprints {
    pub sha256: String,
    pub md5: String,
}

/// Hash the PEM *text* of a public key
///
/// The digests are taken over the exact bytes of `public_key_pem`,
/// line endings included, so any tool hashing the same text gets the same id.
pub fn fingerprint(public_key_pem: &str) -> Fingerprints {
    let data = public_key_pem.as_bytes();
    Fingerprints {
        sha256: FingerprintHash::SHA256.hex(data),
        md5: FingerprintHash::MD5.hex(data),
    }
}

/// The integers of an RSA key, in the order of a JWK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaField {
    N,
    E,
    D,
    P,
    Q,
    Dp,
    Dq,
    Qi,
}

impl RsaField {
    pub const ALL: [RsaField; 8] = [
        RsaField::N,
        RsaField::E,
        RsaField::D,
        RsaField::P,
        RsaField::Q,
        RsaField::Dp,
        RsaField::Dq,
        RsaField::Qi,
    ];

    /// The member name used in a JWK
    pub fn jwk_name(self) -> &'static str {
        use RsaField::*;

        match self {
            N => "n",
            E => "e",
            D => "d",
            P => "p",
            Q => "q",
            Dp => "dp",
            Dq => "dq",
            Qi => "qi",
        }
    }
}

/// The basic trait of a key
pub trait Key {
    /// The size in bits of the key
    fn size(&self) -> usize;
    /// The key name of the key
    fn keyname(&self) -> &'static str;
}

/// Access to the integers of an RSA key as big-endian unsigned bytes
///
/// Implementors return the magnitude only: no sign byte, no leading zeros.
/// `None` means the key doesn't carry that field.
pub trait RsaComponents {
    fn component(&self, field: RsaField) -> Option<Vec<u8>>;
}
