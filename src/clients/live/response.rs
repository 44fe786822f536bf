//! Response parsing for the Sveve API.
//!
//! `SendMessage` answers `{"response": ...}` where the inner object is either a
//! fatal error or a send result. The provider sends no discriminator and the
//! fatal shape may carry the same counters as a result, so the inner value is
//! kept untyped and tried against the fatal shape first.

use crate::errors::ProviderError;
use crate::types::{Balance, SendResult};
use serde::Deserialize;

#[cfg(feature = "tracing")]
use tracing::warn;

#[derive(Debug, Deserialize)]
struct Envelope {
    response: serde_json::Value,
}

/// Fatal error shape. Any other fields next to `fatalError` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FatalError {
    #[serde(rename = "fatalError")]
    pub message: String,
}

/// Decoded `SendMessage` response.
#[derive(Debug, Clone, PartialEq)]
pub enum SendSmsResponse {
    Fatal(FatalError),
    Sent(SendResult),
}

impl SendSmsResponse {
    /// Parse a `SendMessage` response body.
    ///
    /// Returns [`ProviderError::UnexpectedResponse`] with the body verbatim when
    /// it is not JSON, has no `response` field, or matches neither shape.
    pub fn from_text(text: &str) -> Result<Self, ProviderError> {
        let unexpected = || {
            #[cfg(feature = "tracing")]
            warn!(raw = %text, "Sveve response does not match documented data structure");

            ProviderError::UnexpectedResponse {
                raw: text.to_string(),
            }
        };

        let envelope = serde_json::from_str::<Envelope>(text).map_err(|_| unexpected())?;

        Self::from_value(envelope.response).ok_or_else(unexpected)
    }

    /// Ordered trial parse of the inner `response` value.
    fn from_value(value: serde_json::Value) -> Option<Self> {
        // Both shapes are objects; derived structs would also accept sequences.
        if !value.is_object() {
            return None;
        }

        if let Ok(fatal) = FatalError::deserialize(&value) {
            return Some(Self::Fatal(fatal));
        }

        SendResult::deserialize(&value).ok().map(Self::Sent)
    }

    /// Convert response into a Result, turning the fatal shape into an error.
    pub fn into_result(self) -> Result<SendResult, ProviderError> {
        match self {
            Self::Sent(result) => Ok(result),
            Self::Fatal(fatal) => {
                #[cfg(feature = "tracing")]
                warn!(message = %fatal.message, "Sveve rejected the send");

                Err(ProviderError::Fatal {
                    message: fatal.message,
                })
            }
        }
    }
}

/// Parse the plain-text `AccountAdm` balance body.
///
/// The provider reports errors such as bad credentials as a text message with
/// status 200, so anything that is not an integer becomes the error message.
pub fn parse_balance(text: &str) -> Result<Balance, ProviderError> {
    match text.trim().parse::<u64>() {
        Ok(credits) => Ok(Balance::new(credits)),
        Err(_) => {
            #[cfg(feature = "tracing")]
            warn!(body = %text, "Sveve balance query returned an error");

            Err(ProviderError::InvalidBalance {
                body: text.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SendFailure;

    #[test]
    fn test_success_response() {
        let text = r#"{"response": {"msgOkCount": 1, "stdSMSCount": 1, "ids": [29828050]}}"#;

        let response = SendSmsResponse::from_text(text).unwrap();
        let result = response.into_result().unwrap();
        assert_eq!(result.ok_count, 1);
        assert_eq!(result.ids.len(), result.ok_count as usize);
        assert_eq!(result.ids, vec![29_828_050]);
        assert_eq!(result.failures, None);
    }

    #[test]
    fn test_partial_success_keeps_failures_verbatim() {
        let text = r#"{
            "response": {
                "msgOkCount": 1,
                "stdSMSCount": 1,
                "ids": [42824387],
                "errors": [
                    {"number": "1792873691", "message": "Brukeren har ikke tilgang til å sende meldinger til dette landet"},
                    {"number": "63987654", "message": "Telefonnummeret er ikke et mobilnummer"}
                ]
            }
        }"#;

        let result = SendSmsResponse::from_text(text)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(result.ok_count, 1);
        assert_eq!(
            result.failures,
            Some(vec![
                SendFailure {
                    number: "1792873691".to_string(),
                    message: "Brukeren har ikke tilgang til å sende meldinger til dette landet"
                        .to_string(),
                },
                SendFailure {
                    number: "63987654".to_string(),
                    message: "Telefonnummeret er ikke et mobilnummer".to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_fatal_error_wins_over_result_fields() {
        let text = r#"{
            "response": {
                "msgOkCount": 0,
                "stdSMSCount": 0,
                "fatalError": "Feil brukernavn/passord",
                "ids": []
            }
        }"#;

        let response = SendSmsResponse::from_text(text).unwrap();
        assert_eq!(
            response,
            SendSmsResponse::Fatal(FatalError {
                message: "Feil brukernavn/passord".to_string()
            })
        );
        assert_eq!(
            response.into_result().unwrap_err(),
            ProviderError::fatal("Feil brukernavn/passord")
        );
    }

    #[test]
    fn test_unknown_shape_is_unexpected_response() {
        let text = r#"{"response": ["some weird response"]}"#;

        match SendSmsResponse::from_text(text) {
            Err(ProviderError::UnexpectedResponse { raw }) => assert_eq!(raw, text),
            other => panic!("Expected UnexpectedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_response_is_unexpected() {
        for text in [
            r#"{"response": ["some weird response"]}"#,
            r#"{"response": [3, 3, [1, 2, 3]]}"#,
            r#"{"response": "Feil brukernavn/passord"}"#,
            r#"{"response": 42}"#,
            r#"{"response": null}"#,
        ] {
            match SendSmsResponse::from_text(text) {
                Err(ProviderError::UnexpectedResponse { raw }) => assert_eq!(raw, text),
                other => panic!("'{}' should be rejected, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_object_matching_neither_shape_is_unexpected() {
        let text = r#"{"response": {"foo": 1}}"#;

        match SendSmsResponse::from_text(text) {
            Err(ProviderError::UnexpectedResponse { raw }) => assert_eq!(raw, text),
            other => panic!("Expected UnexpectedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_and_missing_envelope_are_unexpected() {
        for text in ["<html>oops</html>", r#"{"msgOkCount": 1}"#, ""] {
            assert!(
                matches!(
                    SendSmsResponse::from_text(text),
                    Err(ProviderError::UnexpectedResponse { .. })
                ),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_balance() {
        assert_eq!(parse_balance("1601").unwrap(), 1601);
        assert_eq!(parse_balance("1601\n").unwrap(), Balance::new(1601));
    }

    #[test]
    fn test_parse_balance_error_text_is_message() {
        let err = parse_balance("Feil brukernavn/passord").unwrap_err();
        assert_eq!(err.to_string(), "Feil brukernavn/passord");

        assert!(parse_balance("-5").is_err());
    }
}
