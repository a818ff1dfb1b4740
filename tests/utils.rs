#![allow(dead_code)]

extern crate acme_rsakeys;

use acme_rsakeys::keys::*;
use rand::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[inline]
pub fn fingerprint_assert(key1: &RsaKeyPair, key2: &RsaKeyPair) {
    let pem1 = key1.to_pem_pair().unwrap().public_key_pem;
    let pem2 = key2.to_pem_pair().unwrap().public_key_pem;
    assert_eq!(fingerprint(&pem1), fingerprint(&pem2));
}

// Flip one random bit of one random byte
pub fn corrupt_random_byte(data: &str) -> Vec<u8> {
    let mut rng = ThreadRng::default();
    let mut bytes = data.as_bytes().to_vec();
    let i = rng.gen_range(0, bytes.len());
    let bit: u8 = rng.gen_range(0, 8);
    bytes[i] ^= 1 << bit;
    bytes
}

pub fn locate_crate_files<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut abspath = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    abspath.push(path);
    abspath
}

pub fn read_asset<P: AsRef<Path>>(path: P) -> String {
    fs::read_to_string(locate_crate_files(Path::new("tests/assets").join(path))).unwrap()
}
