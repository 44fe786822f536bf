//! Console client that prints sends instead of performing them.

use crate::clients::traits::SmsClient;
use crate::errors::{Result, TransportError};
use crate::types::{Balance, Recipients, SendRequest, SendResult};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Balance reported by [`ConsoleClient::remaining_sms`](SmsClient::remaining_sms).
pub const CONSOLE_REMAINING_SMS: u64 = 1000;

/// Client that writes each operation to an output stream and pretends it
/// succeeded. Useful for trying out a flow without spending credits.
///
/// Output lines look like:
///
/// ```text
/// [send_sms] from=[funbit] to=[11111111,22222222] msg=[Hello world!]
/// [remaining_sms] balance=[1000]
/// ```
#[derive(Debug)]
pub struct ConsoleClient<W = io::Stdout> {
    default_sender: String,
    out: Mutex<W>,
}

impl ConsoleClient {
    /// Create a console client writing to stdout.
    pub fn new(default_sender: impl Into<String>) -> Self {
        Self::with_writer(default_sender, io::stdout())
    }
}

impl<W: Write + Send> ConsoleClient<W> {
    /// Create a console client writing to `out`.
    pub fn with_writer(default_sender: impl Into<String>, out: W) -> Self {
        Self {
            default_sender: default_sender.into(),
            out: Mutex::new(out),
        }
    }

    /// Consume the client and return the output stream.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(TransportError::Output)?;
        Ok(())
    }
}

/// Synthetic result: every recipient accepted, ids numbered from zero.
///
/// Counts saturate at `u32::MAX`.
fn echo_result(recipients: &Recipients) -> SendResult {
    let count = u32::try_from(recipients.len()).unwrap_or(u32::MAX);
    SendResult {
        ok_count: count,
        standard_message_count: count,
        ids: (0..u64::from(count)).collect(),
        failures: None,
    }
}

impl<W: Write + Send> SmsClient for ConsoleClient<W> {
    async fn send_sms<R>(&self, to: R, message: &str, sender: Option<&str>) -> Result<SendResult>
    where
        R: Into<Recipients> + Send,
    {
        let request = SendRequest::resolve(to, message, sender, &self.default_sender);

        #[cfg(feature = "tracing")]
        debug!(recipients = request.recipients.len(), sender = %request.sender, "Console send");

        self.write_line(&format!(
            "[send_sms] from=[{}] to=[{}] msg=[{}]",
            request.sender, request.recipients, request.message
        ))?;

        Ok(echo_result(&request.recipients))
    }

    async fn remaining_sms(&self) -> Result<Balance> {
        let balance = Balance::new(CONSOLE_REMAINING_SMS);
        self.write_line(&format!("[remaining_sms] balance=[{}]", balance))?;
        Ok(balance)
    }
}
