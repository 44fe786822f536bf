//! Contract tests for the clients that never touch the network.
//!
//! Application code is written against [`SmsClient`]; these tests drive the
//! console and mock clients through the same generic helpers.

use sveve::{
    Balance, ConsoleClient, MockClient, ProviderError, Result, SendFailure, SendResult, SmsClient,
    SveveError, UsageError,
};

/// Sends one reminder per shift and reports how many messages were queued.
async fn send_shift_reminders<C: SmsClient>(client: &C, shifts: &[(&str, &str)]) -> Result<u32> {
    let mut queued = 0;
    for (phone, shift) in shifts {
        let result = client
            .send_sms(*phone, &format!("Reminder: your shift starts {}", shift), None)
            .await?;
        queued += result.ok_count;
    }
    Ok(queued)
}

/// Refuses to send when fewer credits remain than recipients.
async fn broadcast_if_affordable<C: SmsClient>(
    client: &C,
    recipients: Vec<String>,
    message: &str,
) -> Result<Option<SendResult>> {
    let balance = client.remaining_sms().await?;
    if balance.credits() < recipients.len() as u64 {
        return Ok(None);
    }
    client
        .send_sms(recipients, message, Some("Alerts"))
        .await
        .map(Some)
}

fn sent(count: u32) -> SendResult {
    SendResult {
        ok_count: count,
        standard_message_count: count,
        ids: (100..100 + u64::from(count)).collect(),
        failures: None,
    }
}

#[tokio::test]
async fn test_mock_outbox_records_every_call_in_order() {
    let client = MockClient::new("funbit").with_send_sms_result(Ok(sent(1)));

    let queued = send_shift_reminders(
        &client,
        &[("11111111", "at 08:00"), ("22222222", "at 16:00")],
    )
    .await
    .unwrap();
    assert_eq!(queued, 2);

    let outbox = client.outbox();
    assert_eq!(outbox.len(), 2);
    assert_eq!(outbox[0].request.recipients.joined(), "11111111");
    assert_eq!(
        outbox[0].request.message,
        "Reminder: your shift starts at 08:00"
    );
    assert_eq!(outbox[1].request.recipients.joined(), "22222222");
    assert!(outbox.iter().all(|item| item.request.sender == "funbit"));
    assert!(outbox.iter().all(|item| item.outcome == Ok(sent(1))));
}

#[tokio::test]
async fn test_mock_fatal_error_stops_helper_but_is_recorded() {
    let client = MockClient::new("funbit")
        .with_send_sms_result(Err(ProviderError::fatal("Feil brukernavn/passord")));

    let err = send_shift_reminders(
        &client,
        &[("11111111", "at 08:00"), ("22222222", "at 16:00")],
    )
    .await
    .unwrap_err();

    assert_eq!(err.message(), "Feil brukernavn/passord");
    let outbox = client.outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(
        outbox[0].outcome,
        Err(ProviderError::fatal("Feil brukernavn/passord"))
    );
}

#[tokio::test]
async fn test_mock_partial_success_is_data() {
    let partial = SendResult {
        ok_count: 1,
        standard_message_count: 1,
        ids: vec![42824387],
        failures: Some(vec![SendFailure {
            number: "63987654".to_string(),
            message: "Telefonnummeret er ikke et mobilnummer".to_string(),
        }]),
    };
    let client = MockClient::new("funbit")
        .with_remaining_sms_result(Ok(Balance::new(10)))
        .with_send_sms_result(Ok(partial.clone()));

    let result = broadcast_if_affordable(
        &client,
        vec!["12345678".to_string(), "63987654".to_string()],
        "Storm warning",
    )
    .await
    .unwrap();

    assert_eq!(result, Some(partial));
    let outbox = client.outbox();
    assert_eq!(outbox[0].request.sender, "Alerts");
    assert_eq!(outbox[0].request.recipients.joined(), "12345678,63987654");
}

#[tokio::test]
async fn test_mock_low_balance_skips_send() {
    let client = MockClient::new("funbit")
        .with_remaining_sms_result(Ok(Balance::new(1)))
        .with_send_sms_result(Ok(sent(2)));

    let result = broadcast_if_affordable(
        &client,
        vec!["11111111".to_string(), "22222222".to_string()],
        "Storm warning",
    )
    .await
    .unwrap();

    assert_eq!(result, None);
    assert!(client.outbox().is_empty());
}

#[tokio::test]
async fn test_mock_without_balance_is_usage_error() {
    let client = MockClient::new("funbit").with_send_sms_result(Ok(sent(1)));

    let err = broadcast_if_affordable(&client, vec!["11111111".to_string()], "Hi")
        .await
        .unwrap_err();

    assert!(matches!(err, SveveError::Usage(UsageError::Unconfigured { .. })));
}

#[tokio::test]
async fn test_console_client_through_helpers() {
    let client = ConsoleClient::with_writer("funbit", Vec::<u8>::new());

    let result = broadcast_if_affordable(
        &client,
        vec!["11111111".to_string(), "22222222".to_string()],
        "Storm warning",
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(result.ok_count, 2);
    assert_eq!(result.ids, vec![0, 1]);

    let output = String::from_utf8(client.into_inner()).unwrap();
    assert_eq!(
        output,
        "[remaining_sms] balance=[1000]\n\
         [send_sms] from=[Alerts] to=[11111111,22222222] msg=[Storm warning]\n"
    );
}
