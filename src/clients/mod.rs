//! Sveve client implementations.

pub mod console;
pub mod live;
pub mod mock;
pub(crate) mod traits;

pub use console::{CONSOLE_REMAINING_SMS, ConsoleClient};
pub use live::{SveveClient, SveveClientBuilder};
pub use mock::{MockClient, MockOutcome, OutboxItem};
pub use traits::SmsClient;
