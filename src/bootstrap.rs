use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::repository::Repository;

pub const MAX_ATTEMPTS: u32 = 10;
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Establishes the database connection, tolerating a store that is still
/// coming up. Exhausting the attempt limit surfaces the last error; the
/// caller decides process fate.
pub async fn connect_with_retry(database_dsn: &str) -> Result<Repository, tokio_postgres::Error> {
    retry(MAX_ATTEMPTS, RETRY_DELAY, || Repository::new(database_dsn)).await
}

async fn retry<T, E, F, Fut>(max_attempts: u32, delay: Duration, mut connect: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match connect().await {
            Ok(connection) => {
                tracing::info!("Database connection established on attempt {attempt}");
                return Ok(connection);
            }
            Err(e) => {
                tracing::warn!(
                    "Database connection attempt {attempt}/{max_attempts} failed: {e}"
                );
                if attempt >= max_attempts {
                    return Err(e);
                }
                tokio::time::sleep(delay).await;
            }
        }
    }
}
