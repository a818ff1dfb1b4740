/// JSON Web Key
pub mod jwk;
/// PEM serialization
pub mod pem;
