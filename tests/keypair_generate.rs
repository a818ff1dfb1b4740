extern crate acme_rsakeys;

use acme_rsakeys::error::ErrorKind;
use acme_rsakeys::keys::*;
use acme_rsakeys::*;

#[test]
fn rsa_generate_default() {
    let bundle = generate(None, None).unwrap();
    let key = RsaKeyPair::from_jwk(bundle.private_key_jwk()).unwrap();
    assert_eq!(key.size(), 2048);
    assert_eq!(key.keyname(), "RSA");
    assert_eq!(key.component(RsaField::E).unwrap(), vec![0x01, 0x00, 0x01]);
    assert_eq!(bundle.private_key_jwk().e.as_deref(), Some("AQAB"));
}

#[test]
fn rsa_generate_strange() {
    let bundle = generate(Some(2500), Some(3)).unwrap();
    let key = RsaKeyPair::from_pem(bundle.private_key_pem()).unwrap();
    assert_eq!(key.size(), 2500);
    assert_eq!(bundle.private_key_jwk().e.as_deref(), Some("Aw=="));
}

#[test]
fn rsa_generate_minsize() {
    let err = generate(Some(512), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn rsa_generate_maxsize() {
    let err = generate(Some(32768), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn rsa_generate_explicit_zero() {
    assert_eq!(
        generate(Some(0), None).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
    assert_eq!(
        generate(None, Some(0)).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn rsa_generate_even_exponent() {
    let err = generate(None, Some(65536)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn rsa_generate_in_background() {
    let task = spawn_generate(Some(1024), None).unwrap();
    assert_eq!(task.params().bits(), 1024);
    let bundle = task.wait().unwrap();
    let key = RsaKeyPair::from_pem(bundle.private_key_pem()).unwrap();
    assert_eq!(key.size(), 1024);
}

#[test]
fn rsa_generate_abandoned() {
    // Dropping the handle must neither block nor panic
    let task = spawn_generate(Some(1024), None).unwrap();
    drop(task);
    let bundle = generate(Some(1024), None).unwrap();
    assert_eq!(bundle.private_key_jwk().kty, "RSA");
}
