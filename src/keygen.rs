use crate::bundle::KeyBundle;
use crate::error::{Error, ErrorKind, KeyResult};
use crate::keys::rsa::check_params;
use crate::keys::RsaKeyPair;
use log::{debug, trace};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// The modulus size used when the caller doesn't give one
pub const DEFAULT_BITS: u32 = 2048;
/// The public exponent used when the caller doesn't give one
pub const DEFAULT_EXPONENT: u32 = 65537;

/// Parameters of a key generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenParams {
    bits: u32,
    exponent: u32,
}

impl KeyGenParams {
    /// `None` selects the default; an explicit value is never replaced by it,
    /// so `Some(0)` is kept and rejected by [`check`](#method.check).
    pub fn new(bits: Option<u32>, exponent: Option<u32>) -> Self {
        KeyGenParams {
            bits: bits.unwrap_or(DEFAULT_BITS),
            exponent: exponent.unwrap_or(DEFAULT_EXPONENT),
        }
    }

    /// Fail with `InvalidParameter` if the key can't be generated
    pub fn check(&self) -> KeyResult<()> {
        check_params(self.bits, self.exponent)
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Generate the key pair
    ///
    /// Depending on the host this takes from well under a second to minutes.
    pub fn generate_keypair(&self) -> KeyResult<RsaKeyPair> {
        let start = Instant::now();
        let key = RsaKeyPair::generate(self.bits, self.exponent)?;
        debug!(
            "Generated {}-bit RSA key (e = {}) in {:?}",
            self.bits,
            self.exponent,
            start.elapsed()
        );
        Ok(key)
    }

    /// Generate the key pair and convert it into every form
    pub fn generate(&self) -> KeyResult<KeyBundle> {
        KeyBundle::from_keypair(&self.generate_keypair()?)
    }
}

impl Default for KeyGenParams {
    fn default() -> Self {
        KeyGenParams {
            bits: DEFAULT_BITS,
            exponent: DEFAULT_EXPONENT,
        }
    }
}

/// Generate a RSA key and return all of its forms
///
/// Missing parameters default to `2048` bits and the exponent `65537`.
pub fn generate(bits: Option<u32>, exponent: Option<u32>) -> KeyResult<KeyBundle> {
    KeyGenParams::new(bits, exponent).generate()
}

/// Run [`generate`](fn.generate.html) on its own thread
///
/// The parameters are checked before the thread is started.
pub fn spawn_generate(bits: Option<u32>, exponent: Option<u32>) -> KeyResult<KeyGenTask> {
    let params = KeyGenParams::new(bits, exponent);
    params.check()?;
    let handle = thread::Builder::new()
        .name("rsa-keygen".to_string())
        .spawn(move || {
            trace!("Key generation thread started");
            let result = params.generate();
            trace!("Key generation thread finished");
            result
        })
        .map_err(|e| Error::with_error(ErrorKind::ProviderFailure, e))?;
    Ok(KeyGenTask { params, handle })
}

/// A key generation running in the background
///
/// Dropping the task detaches the thread; the result is then discarded.
/// The generation itself can't be interrupted.
#[derive(Debug)]
pub struct KeyGenTask {
    params: KeyGenParams,
    handle: JoinHandle<KeyResult<KeyBundle>>,
}

impl KeyGenTask {
    pub fn params(&self) -> KeyGenParams {
        self.params
    }

    /// Whether `wait()` would return without blocking
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the key is generated
    pub fn wait(self) -> KeyResult<KeyBundle> {
        self.handle.join().map_err(|_| {
            Error::with_error(ErrorKind::ProviderFailure, "key generation thread panicked")
        })?
    }
}
