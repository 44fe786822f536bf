//! Core types shared by every Sveve client.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

// =============================================================================
// Credentials
// =============================================================================

/// Account credentials sent with every live API call.
///
/// Neither part is validated; the provider answers bad credentials with a
/// fatal error.
#[derive(Clone)]
pub struct Credentials {
    user: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Recipients
// =============================================================================

/// Ordered list of phone numbers a message is addressed to.
///
/// A single string is accepted as well; commas in it separate numbers, so
/// `"11111111,22222222"` and `["11111111", "22222222"]` are the same recipients.
///
/// Numbers are not validated and the list may be empty. An empty list goes out
/// as `to=""` and the live API answers it with a fatal error.
///
/// ```rust
/// use sveve::Recipients;
///
/// let to = Recipients::from(["11111111", "22222222"]);
/// assert_eq!(to.to_string(), "11111111,22222222");
/// assert_eq!(to.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipients(Vec<String>);

impl Recipients {
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(numbers.into_iter().map(Into::into).collect())
    }

    /// Number of recipients.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined form expected by the `to` field of the API.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl Display for Recipients {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl From<&str> for Recipients {
    fn from(to: &str) -> Self {
        Self::new(to.split(','))
    }
}

impl From<String> for Recipients {
    fn from(to: String) -> Self {
        Self::from(to.as_str())
    }
}

impl From<Vec<String>> for Recipients {
    fn from(numbers: Vec<String>) -> Self {
        Self(numbers)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(numbers: Vec<&str>) -> Self {
        Self::new(numbers)
    }
}

impl From<&[&str]> for Recipients {
    fn from(numbers: &[&str]) -> Self {
        Self::new(numbers.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(numbers: [&str; N]) -> Self {
        Self::new(numbers)
    }
}

// =============================================================================
// SendRequest
// =============================================================================

/// A send with its sender resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub recipients: Recipients,
    pub message: String,
    pub sender: String,
}

impl SendRequest {
    /// Build a request, falling back to `default_sender` when `sender` is
    /// missing or empty.
    pub fn resolve(
        recipients: impl Into<Recipients>,
        message: impl Into<String>,
        sender: Option<&str>,
        default_sender: &str,
    ) -> Self {
        let sender = sender
            .filter(|sender| !sender.is_empty())
            .unwrap_or(default_sender);

        Self {
            recipients: recipients.into(),
            message: message.into(),
            sender: sender.to_string(),
        }
    }
}

// =============================================================================
// SendResult
// =============================================================================

/// A recipient the provider refused while still sending to the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendFailure {
    /// The rejected phone number, as echoed by the provider.
    pub number: String,
    /// The provider's reason, usually in Norwegian.
    pub message: String,
}

/// Outcome of a send that was at least partly accepted.
///
/// When `failures` is present, `ok_count` and `ids` cover only the accepted
/// recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    #[serde(rename = "msgOkCount")]
    pub ok_count: u32,
    #[serde(rename = "stdSMSCount")]
    pub standard_message_count: u32,
    /// One id per queued message.
    pub ids: Vec<u64>,
    #[serde(rename = "errors", default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<SendFailure>>,
}

impl SendResult {
    /// True when no recipient was rejected.
    pub fn is_complete(&self) -> bool {
        self.failures
            .as_ref()
            .is_none_or(|failures| failures.is_empty())
    }
}

// =============================================================================
// Balance
// =============================================================================

/// Remaining message credits on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Balance(u64);

impl Balance {
    pub fn new(credits: u64) -> Self {
        Self(credits)
    }

    pub fn credits(&self) -> u64 {
        self.0
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Balance {
    fn from(credits: u64) -> Self {
        Self(credits)
    }
}

impl PartialEq<u64> for Balance {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}
