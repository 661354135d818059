//! Shared blocking HTTP client.
//!
//! One client per process so connection pools are reused across image
//! downloads. No store-level timeout is configured: a hung remote stalls
//! the calling sync flow, matching the synchronous contract.

use once_cell::sync::Lazy;
use reqwest::blocking::Client;

static SHARED_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Process-wide blocking client for remote asset downloads.
pub fn shared_client() -> &'static Client {
    &SHARED_CLIENT
}
