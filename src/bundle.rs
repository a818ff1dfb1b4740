use crate::error::KeyResult;
use crate::format::jwk::Jwk;
use crate::keys::{fingerprint, Fingerprints, RsaKeyPair};
use serde::Serialize;

/// Every form of a RSA key needed by an ACME client
///
/// A bundle is only ever built whole: if one of the conversions fails, no
/// bundle is returned. It serializes to JSON with the field names of the
/// legacy tooling (`publicKeyPem`, `privateKeyPem`, `privateKeyJwk`,
/// `publicKeySha256`, `publicKeyMd5`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBundle {
    public_key_pem: String,
    private_key_pem: String,
    private_key_jwk: Jwk,
    public_key_sha256: String,
    public_key_md5: String,
}

impl KeyBundle {
    /// Convert the key pair into all forms
    pub fn from_keypair(key: &RsaKeyPair) -> KeyResult<Self> {
        let pems = key.to_pem_pair()?;
        let Fingerprints { sha256, md5 } = fingerprint(&pems.public_key_pem);
        let jwk = key.to_jwk()?;

        Ok(KeyBundle {
            public_key_pem: pems.public_key_pem,
            private_key_pem: pems.private_key_pem,
            private_key_jwk: jwk,
            public_key_sha256: sha256,
            public_key_md5: md5,
        })
    }

    /// Rebuild all forms from a stored JWK
    ///
    /// The JWK of the bundle is re-encoded from the key, so it is the
    /// canonical form even if the input carried leading zero bytes.
    pub fn from_jwk(jwk: &Jwk) -> KeyResult<Self> {
        Self::from_keypair(&RsaKeyPair::from_jwk(jwk)?)
    }

    /// Rebuild all forms from a stored private key PEM
    pub fn from_pem(pem: &str) -> KeyResult<Self> {
        Self::from_keypair(&RsaKeyPair::from_pem(pem)?)
    }

    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }

    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }

    pub fn private_key_jwk(&self) -> &Jwk {
        &self.private_key_jwk
    }

    /// Hex SHA-256 of the public key PEM text, the account id
    pub fn public_key_sha256(&self) -> &str {
        &self.public_key_sha256
    }

    /// Hex MD5 of the public key PEM text, for legacy account ids
    pub fn public_key_md5(&self) -> &str {
        &self.public_key_md5
    }

    pub fn fingerprints(&self) -> Fingerprints {
        Fingerprints {
            sha256: self.public_key_sha256.clone(),
            md5: self.public_key_md5.clone(),
        }
    }

    pub fn to_json(&self) -> KeyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PKCS1_PEM: &str = include_str!("../tests/assets/rsa1024.pem");
    const JWK_JSON: &str = include_str!("../tests/assets/rsa1024.jwk.json");

    #[test]
    fn legacy_account_ids() {
        let bundle = KeyBundle::from_pem(PKCS1_PEM).unwrap();
        assert_eq!(
            bundle.public_key_sha256(),
            "c46a53251c95f45e94f05d96ef5fa14915f41d16f586860cb6b8445bd7e5c4e0"
        );
        assert_eq!(bundle.public_key_md5(), "ef296899959300044a27d277f3bdbd03");
    }

    #[test]
    fn pem_and_jwk_agree() {
        let from_pem = KeyBundle::from_pem(PKCS1_PEM).unwrap();
        let from_jwk = KeyBundle::from_jwk(&Jwk::from_json(JWK_JSON).unwrap()).unwrap();
        assert_eq!(from_pem, from_jwk);
        assert_eq!(from_pem.private_key_pem(), PKCS1_PEM.replace('\n', "\r\n"));
    }

    #[test]
    fn json_field_names() {
        let bundle = KeyBundle::from_pem(PKCS1_PEM).unwrap();
        let value: serde_json::Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "privateKeyJwk",
                "privateKeyPem",
                "publicKeyMd5",
                "publicKeyPem",
                "publicKeySha256"
            ]
        );
        assert_eq!(obj["privateKeyJwk"]["kty"], "RSA");
    }
}
