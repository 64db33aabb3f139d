use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use rand::thread_rng;

/// Argon2 PHC string for storage in `users.password`.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut thread_rng());
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
