use crate::codec::{b64_to_bytes, bytes_to_b64};
use crate::error::{Error, ErrorKind, KeyResult};
use crate::keys::rsa::RSA_NAME;
use crate::keys::{RsaComponents, RsaField, RsaKeyPair};
use openssl::bn::BigNum;
use serde::{Deserialize, Serialize};
use std::convert::TryInto;
use zeroize::Zeroizing;

/// A RSA JSON Web Key
///
/// Every integer is the padded *standard* base64 of its big-endian unsigned
/// bytes. The integers are optional so that an incomplete key read from
/// storage can still be represented; it is rejected when converted back
/// into a [`RsaKeyPair`](../keys/rsa/struct.RsaKeyPair.html).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

impl Jwk {
    /// Encode all eight integers of the key pair
    pub fn from_keypair(key: &RsaKeyPair) -> KeyResult<Self> {
        Self::from_components(key)
    }

    fn from_components<K: RsaComponents>(key: &K) -> KeyResult<Self> {
        let encode = |field: RsaField| -> KeyResult<String> {
            let bytes = key.component(field).ok_or_else(|| {
                Error::with_error(
                    ErrorKind::InvalidKey,
                    format!("missing component `{}`", field.jwk_name()),
                )
            })?;
            Ok(bytes_to_b64(&bytes))
        };

        Ok(Jwk {
            kty: RSA_NAME.to_string(),
            n: Some(encode(RsaField::N)?),
            e: Some(encode(RsaField::E)?),
            d: Some(encode(RsaField::D)?),
            p: Some(encode(RsaField::P)?),
            q: Some(encode(RsaField::Q)?),
            dp: Some(encode(RsaField::Dp)?),
            dq: Some(encode(RsaField::Dq)?),
            qi: Some(encode(RsaField::Qi)?),
        })
    }

    /// Parse a JWK from JSON text
    pub fn from_json(json: &str) -> KeyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the JWK to JSON text
    pub fn to_json(&self) -> KeyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The public half only: `kty`, `n` and `e`
    pub fn public_part(&self) -> Jwk {
        Jwk {
            kty: self.kty.clone(),
            n: self.n.clone(),
            e: self.e.clone(),
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
        }
    }

    pub fn field(&self, field: RsaField) -> Option<&str> {
        use RsaField::*;

        let value = match field {
            N => &self.n,
            E => &self.e,
            D => &self.d,
            P => &self.p,
            Q => &self.q,
            Dp => &self.dp,
            Dq => &self.dq,
            Qi => &self.qi,
        };
        value.as_deref()
    }
}

pub(crate) fn decode_jwk(jwk: &Jwk) -> KeyResult<RsaKeyPair> {
    if jwk.kty != RSA_NAME {
        return Err(Error::with_error(
            ErrorKind::InvalidKey,
            format!("unsupported key type `{}`", jwk.kty),
        ));
    }
    // Check every field is present before decoding any of them
    let mut values = Vec::with_capacity(RsaField::ALL.len());
    for field in &RsaField::ALL {
        let value = jwk.field(*field).ok_or_else(|| {
            Error::with_error(
                ErrorKind::InvalidKey,
                format!("missing field `{}`", field.jwk_name()),
            )
        })?;
        values.push(value);
    }
    let mut ints = Vec::with_capacity(values.len());
    for value in values {
        // Best effort: the base64 text itself belongs to the caller
        let bytes = Zeroizing::new(b64_to_bytes(value)?);
        let bn = BigNum::from_slice(&bytes)
            .map_err(|e| Error::with_error(ErrorKind::InvalidKey, e))?;
        ints.push(bn);
    }

    let [n, e, d, p, q, dp, dq, qi]: [BigNum; 8] =
        ints.try_into().map_err(|_| ErrorKind::Unknown)?;
    RsaKeyPair::from_components(n, e, d, p, q, dp, dq, qi)
}

/// Read a private key PEM and convert it to a JWK
pub fn pem_to_jwk(pem: &str) -> KeyResult<Jwk> {
    RsaKeyPair::from_pem(pem)?.to_jwk()
}
