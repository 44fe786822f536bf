//! Runs the same notification code against the console client.
//!
//! Nothing is sent; the intended calls are printed to stdout.
//!
//! # Running
//!
//! ```bash
//! cargo run --example console_client
//! ```

use sveve::{ConsoleClient, Result, SmsClient};

async fn notify_team<C: SmsClient>(client: &C, team: &[&str]) -> Result<()> {
    let balance = client.remaining_sms().await?;
    println!("{} credits available", balance);

    let result = client
        .send_sms(team, "Deploy finished", Some("CI"))
        .await?;
    println!("Queued {} messages", result.ok_count);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = ConsoleClient::new("MyCompany");
    notify_team(&client, &["11111111", "22222222"]).await
}
