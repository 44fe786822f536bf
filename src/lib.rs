//! # Sveve
//!
//! A typed client for the [Sveve](https://sveve.no) SMS HTTP API.
//!
//! The API offers two operations: sending a message to one or more recipients
//! and querying the remaining message credits. This crate maps the provider's
//! ad-hoc JSON and plain-text answers onto a small typed model with a single
//! error type, [`SveveError`].
//!
//! ## Clients
//!
//! | Client | Network | Use |
//! |--------|---------|-----|
//! | [`SveveClient`] | yes | Production |
//! | [`ConsoleClient`] | no | Manual smoke tests; prints what would be sent |
//! | [`MockClient`] | no | Automated tests; records sends, returns canned outcomes |
//!
//! All three implement [`SmsClient`], so application code can be written once
//! and handed whichever client fits.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sveve::{SmsClient, SveveClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SveveClient::with_credentials("user", "password", "MyCompany")?;
//!
//!     let result = client
//!         .send_sms(["11111111", "22222222"], "Hello world!", None)
//!         .await?;
//!     println!("Queued {} messages, ids {:?}", result.ok_count, result.ids);
//!
//!     if let Some(failures) = &result.failures {
//!         for failure in failures {
//!             println!("{} was rejected: {}", failure.number, failure.message);
//!         }
//!     }
//!
//!     println!("{} credits left", client.remaining_sms().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! A send either fails as a whole ([`ProviderError::Fatal`], e.g. bad
//! credentials) or returns a [`SendResult`]. Recipients rejected while others
//! went through are listed in [`SendResult::failures`]; that is not an error.
//!
//! Nothing in this crate retries. [`RetryableError::is_retryable`] tells which
//! failures are worth another attempt.
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation with OpenTelemetry span status (enabled by default)

pub mod clients;
pub mod errors;
pub mod types;

// Re-export commonly used types at the crate root
pub use clients::live::{DEFAULT_API_URL, FatalError, SendSmsResponse};
pub use clients::{
    CONSOLE_REMAINING_SMS, ConsoleClient, MockClient, MockOutcome, OutboxItem, SmsClient,
    SveveClient, SveveClientBuilder,
};
pub use errors::{ProviderError, Result, RetryableError, SveveError, TransportError, UsageError};
pub use types::{Balance, Credentials, Recipients, SendFailure, SendRequest, SendResult};
