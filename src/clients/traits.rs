//! Client trait definition.

use crate::errors::Result;
use crate::types::{Balance, Recipients, SendResult};
use std::future::Future;

/// Capability shared by every Sveve client.
///
/// The live [`SveveClient`](crate::SveveClient) talks to the provider, while
/// [`ConsoleClient`](crate::ConsoleClient) and [`MockClient`](crate::MockClient)
/// stand in for it without network access. Code that only needs to send
/// messages should be generic over this trait so any of them can be plugged in.
///
/// # Note on async methods
///
/// All methods return `Send` futures, making them compatible with
/// multi-threaded executors. Each call performs at most one HTTP request.
///
/// # Example
///
/// ```rust,ignore
/// use sveve::{SmsClient, Result};
///
/// async fn notify_on_call<C: SmsClient>(client: &C, phone: &str) -> Result<()> {
///     client.send_sms(phone, "You are on call tonight", None).await?;
///     Ok(())
/// }
/// ```
pub trait SmsClient: Send + Sync {
    /// Send `message` to every recipient.
    ///
    /// # Arguments
    /// * `to` - A single number, a comma-separated string or a list of numbers
    /// * `message` - The message body
    /// * `sender` - Sender name or number; `None` uses the client's default sender
    ///
    /// # Returns
    /// The provider's result. Recipients that were rejected while others were
    /// accepted show up in [`SendResult::failures`] rather than as an error.
    fn send_sms<R>(
        &self,
        to: R,
        message: &str,
        sender: Option<&str>,
    ) -> impl Future<Output = Result<SendResult>> + Send
    where
        R: Into<Recipients> + Send;

    /// Number of message credits left on the account.
    fn remaining_sms(&self) -> impl Future<Output = Result<Balance>> + Send;
}
