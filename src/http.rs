use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Process-wide shared HTTP client.
///
/// All outbound generation calls reuse one connection pool. Cloning a
/// `reqwest::Client` only bumps an internal refcount, so handing out
/// references is cheap.
static SHARED_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("Failed to create shared HTTP client")
});

pub fn shared_client() -> &'static Client {
    &SHARED_CLIENT
}
