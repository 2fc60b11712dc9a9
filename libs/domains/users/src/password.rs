//! One-way password hashing.

use crate::error::{UserError, UserResult};

/// bcrypt work factor applied to every stored password.
pub const BCRYPT_COST: u32 = 12;

/// bcrypt only reads the first 72 bytes of its input; longer passwords are
/// rejected instead of silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash `password` with a fresh random salt.
///
/// Fails if the password is longer than [`MAX_PASSWORD_BYTES`] or bcrypt
/// cannot produce a hash. Never retried.
pub fn hash_password(password: &str) -> UserResult<String> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(UserError::PasswordHash(format!(
            "password exceeds {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Check `password` against a hash produced by [`hash_password`].
pub fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    Ok(bcrypt::verify(password, hash)?)
}
