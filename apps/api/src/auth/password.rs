use anyhow::Context;

use crate::errors::AppError;

/// Hashes a password with a fresh bcrypt salt on the blocking pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("password hashing task failed")?
        .context("password hashing failed")?;
    Ok(hash)
}

/// Checks a password against a stored hash. A malformed hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("password verification task failed")?;
    Ok(matches.unwrap_or(false))
}

/// Spends one bcrypt round at `cost` on a login for an unknown account, so it
/// takes as long as a wrong password against a stored hash.
pub async fn burn_password_check(password: String, cost: u32) -> Result<(), AppError> {
    hash_password(password, cost).await.map(|_| ())
}
