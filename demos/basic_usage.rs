//! Basic usage example for the Sveve client.
//!
//! Queries the remaining credits and sends one message.
//!
//! # Running
//!
//! ```bash
//! SVEVE_USER=user SVEVE_PASSWORD=password SVEVE_SENDER=MyCompany \
//!     cargo run --example basic_usage -- 12345678 "Hello world!"
//! ```

use std::env;
use sveve::{SmsClient, SveveClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user = env::var("SVEVE_USER").expect("SVEVE_USER environment variable must be set");
    let password =
        env::var("SVEVE_PASSWORD").expect("SVEVE_PASSWORD environment variable must be set");
    let sender = env::var("SVEVE_SENDER").expect("SVEVE_SENDER environment variable must be set");

    let mut args = env::args().skip(1);
    let to = args.next().expect("usage: basic_usage <numbers> <message>");
    let message = args.next().unwrap_or_else(|| "Hello world!".to_string());

    let client = SveveClient::with_credentials(user, password, sender)?;

    println!("Remaining SMS: {}", client.remaining_sms().await?);

    // A comma-separated string works as well as a list
    let result = client.send_sms(to, &message, None).await?;
    println!("Queued {} messages, ids {:?}", result.ok_count, result.ids);

    if let Some(failures) = &result.failures {
        for failure in failures {
            println!("  {} rejected: {}", failure.number, failure.message);
        }
    }

    Ok(())
}
