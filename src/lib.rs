//! Convert RSA account keys between the forms used by ACME clients
//!
//! A key can live as an in-memory [`RsaKeyPair`](keys/rsa/struct.RsaKeyPair.html),
//! as PKCS#1 PEM text, or as a [`Jwk`](format/jwk/struct.Jwk.html) whose
//! integers are padded standard base64. The account id of a key is the
//! SHA-256 (and, for older clients, MD5) of its public key PEM text.
//!
//! # Example
//! ```no_run
//! use acme_rsakeys::{generate, KeyBundle};
//!
//! let bundle = generate(None, None).unwrap();
//! println!("{}", bundle.public_key_sha256());
//!
//! let restored = KeyBundle::from_jwk(bundle.private_key_jwk()).unwrap();
//! assert_eq!(restored.private_key_pem(), bundle.private_key_pem());
//! ```
pub mod bundle;
pub mod codec;
pub mod error;
pub mod format;
pub mod keygen;
pub mod keys;

pub use bundle::KeyBundle;
pub use format::jwk::{pem_to_jwk, Jwk};
pub use format::pem::{LineEnding, PemPair};
pub use keygen::{generate, spawn_generate, KeyGenParams, KeyGenTask};
pub use keys::{fingerprint, FingerprintHash, Fingerprints, Key, RsaKeyPair, RsaPublicKey};
