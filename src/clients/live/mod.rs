//! Live client for the Sveve HTTP API.
//!
//! # Example
//!
//! ```rust,ignore
//! use sveve::{SmsClient, SveveClient};
//! use std::time::Duration;
//!
//! let client = SveveClient::builder("user", "password", "MyCompany")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! match client.send_sms("12345678", "Hello world!", None).await {
//!     Ok(result) if result.is_complete() => println!("Sent {} messages", result.ok_count),
//!     Ok(result) => println!("Some recipients failed: {:?}", result.failures),
//!     Err(e) => println!("Nothing was sent: {}", e),
//! }
//! ```

pub mod client;
pub mod response;

// Re-export commonly used types
pub use client::{DEFAULT_API_URL, SveveClient, SveveClientBuilder};
pub use response::{FatalError, SendSmsResponse};
