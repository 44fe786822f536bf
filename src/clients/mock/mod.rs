//! Recording client for tests.
//!
//! [`MockClient`] never touches the network. Each operation returns the
//! outcome it was configured with, and every send is appended to an outbox so
//! tests can assert on what would have been sent.
//!
//! ```rust
//! use sveve::{MockClient, ProviderError, SmsClient};
//!
//! # tokio_test_block_on(async {
//! let client = MockClient::new("funbit")
//!     .with_send_sms_result(Err(ProviderError::fatal("Feil brukernavn/passord")));
//!
//! let err = client.send_sms("12345678", "Hello", None).await.unwrap_err();
//! assert_eq!(err.message(), "Feil brukernavn/passord");
//!
//! let outbox = client.outbox();
//! assert_eq!(outbox.len(), 1);
//! assert_eq!(outbox[0].request.sender, "funbit");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use crate::clients::traits::SmsClient;
use crate::errors::{ProviderError, Result, UsageError};
use crate::types::{Balance, Recipients, SendRequest, SendResult};
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Outcome a mock operation is configured to produce.
pub type MockOutcome<T> = std::result::Result<T, ProviderError>;

/// One attempted send, recorded by [`MockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxItem {
    /// The request with its sender resolved.
    pub request: SendRequest,
    /// What the mock answered.
    pub outcome: MockOutcome<SendResult>,
}

/// Client returning canned outcomes and recording every send.
///
/// An operation left unconfigured fails with [`UsageError::Unconfigured`], so
/// a test that wanders into a path it did not set up fails loudly.
///
/// The outbox sits behind a mutex only to satisfy the `Send + Sync` bound of
/// [`SmsClient`]. Share one instance between concurrent tasks and the
/// recorded order is whatever order the lock was taken in.
#[derive(Debug)]
pub struct MockClient {
    default_sender: String,
    send_sms_result: Option<MockOutcome<SendResult>>,
    remaining_sms_result: Option<MockOutcome<Balance>>,
    outbox: Mutex<Vec<OutboxItem>>,
}

impl MockClient {
    /// Create a mock with no operation configured.
    pub fn new(default_sender: impl Into<String>) -> Self {
        Self {
            default_sender: default_sender.into(),
            send_sms_result: None,
            remaining_sms_result: None,
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Set the outcome of every `send_sms` call. `None` makes it unsupported.
    pub fn with_send_sms_result(
        mut self,
        result: impl Into<Option<MockOutcome<SendResult>>>,
    ) -> Self {
        self.send_sms_result = result.into();
        self
    }

    /// Set the outcome of every `remaining_sms` call. `None` makes it unsupported.
    pub fn with_remaining_sms_result(
        mut self,
        result: impl Into<Option<MockOutcome<Balance>>>,
    ) -> Self {
        self.remaining_sms_result = result.into();
        self
    }

    pub fn default_sender(&self) -> &str {
        &self.default_sender
    }

    /// Snapshot of all recorded sends, in call order.
    pub fn outbox(&self) -> Vec<OutboxItem> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, item: OutboxItem) {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }
}

impl SmsClient for MockClient {
    async fn send_sms<R>(&self, to: R, message: &str, sender: Option<&str>) -> Result<SendResult>
    where
        R: Into<Recipients> + Send,
    {
        let outcome = self
            .send_sms_result
            .clone()
            .ok_or(UsageError::Unconfigured {
                operation: "send_sms",
            })?;

        let request = SendRequest::resolve(to, message, sender, &self.default_sender);

        #[cfg(feature = "tracing")]
        debug!(
            recipients = %request.recipients,
            sender = %request.sender,
            success = outcome.is_ok(),
            "Mock send recorded"
        );

        self.record(OutboxItem {
            request,
            outcome: outcome.clone(),
        });

        Ok(outcome?)
    }

    async fn remaining_sms(&self) -> Result<Balance> {
        let outcome = self
            .remaining_sms_result
            .clone()
            .ok_or(UsageError::Unconfigured {
                operation: "remaining_sms",
            })?;

        Ok(outcome?)
    }
}
