use argon2::{
    Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use crate::PasswordVerifier;

/// Hash a password using Argon2id with OWASP-recommended parameters
/// - Memory: 19456 KB (19 MB)
/// - Iterations: 2
/// - Parallelism: 1
pub fn hash_password(password: &str) -> issuetrack_shared::Result<String> {
    let params = Params::new(19456, 2, 1, None)?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verify a password against an Argon2 hash.
///
/// A digest that does not parse is an error, a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> issuetrack_shared::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2Verifier;

#[async_trait]
impl PasswordVerifier for Argon2Verifier {
    async fn verify_password(&self, password: &str, digest: &str) -> anyhow::Result<bool> {
        Ok(verify_password(password, digest)?)
    }
}
