//! Sveve HTTP client.

use super::response::{SendSmsResponse, parse_balance};
use crate::clients::traits::SmsClient;
use crate::errors::{Result, TransportError};
use crate::types::{Balance, Credentials, Recipients, SendRequest, SendResult};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::Serialize;
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::Span;
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Default Sveve API URL.
pub const DEFAULT_API_URL: &str = "https://sveve.no/SMS";

const BALANCE_PATH: &str = "AccountAdm";
const SEND_PATH: &str = "SendMessage";

/// JSON body of a `SendMessage` call.
#[derive(Serialize)]
struct SendMessageBody<'a> {
    user: &'a str,
    passwd: &'a str,
    to: String,
    from: &'a str,
    msg: &'a str,
    f: &'static str,
}

/// Sveve HTTP client.
///
/// Credentials and the default sender are fixed at construction.
///
/// # Example
///
/// ```rust,ignore
/// use sveve::{SmsClient, SveveClient};
///
/// let client = SveveClient::with_credentials("user", "password", "MyCompany")?;
///
/// let result = client.send_sms(["11111111", "22222222"], "Hello world!", None).await?;
/// println!("Queued {} messages", result.ok_count);
///
/// let balance = client.remaining_sms().await?;
/// println!("{} credits left", balance);
/// ```
#[derive(Clone)]
pub struct SveveClient {
    http_client: ClientWithMiddleware,
    credentials: Credentials,
    default_sender: String,
    endpoint: Url,
}

impl std::fmt::Debug for SveveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SveveClient")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .field("default_sender", &self.default_sender)
            .finish()
    }
}

/// Builder for configuring a [`SveveClient`].
pub struct SveveClientBuilder {
    credentials: Credentials,
    default_sender: String,
    endpoint: Option<Url>,
    timeout: Option<Duration>,
    http_client: Option<ClientWithMiddleware>,
}

impl SveveClientBuilder {
    /// Create a new builder with the given credentials and default sender.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        default_sender: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(user, password),
            default_sender: default_sender.into(),
            endpoint: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Set a custom API endpoint. Operation paths are appended to it.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set a timeout applied to each whole request.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`SveveClient`].
    pub fn build(self) -> Result<SveveClient> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => parse_endpoint(DEFAULT_API_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder.build().map_err(TransportError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(SveveClient {
            http_client,
            credentials: self.credentials,
            default_sender: self.default_sender,
            endpoint,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|_| {
        TransportError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        }
        .into()
    })
}

impl SveveClient {
    /// Create a new Sveve client.
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the Sveve API, e.g. `https://sveve.no/SMS`
    /// * `user` - Account user name
    /// * `password` - Account password
    /// * `default_sender` - Sender used when a send does not name one
    pub fn new(
        endpoint: impl AsRef<str>,
        user: impl Into<String>,
        password: impl Into<String>,
        default_sender: impl Into<String>,
    ) -> Result<Self> {
        let url = parse_endpoint(endpoint.as_ref())?;

        Self::builder(user, password, default_sender)
            .endpoint(url)
            .build()
    }

    /// Create a new client with the default API URL.
    pub fn with_credentials(
        user: impl Into<String>,
        password: impl Into<String>,
        default_sender: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(user, password, default_sender).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(
        user: impl Into<String>,
        password: impl Into<String>,
        default_sender: impl Into<String>,
    ) -> SveveClientBuilder {
        SveveClientBuilder::new(user, password, default_sender)
    }

    pub fn default_sender(&self) -> &str {
        &self.default_sender
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Append an operation path to the endpoint.
    fn operation_url(&self, operation: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
            })?
            .pop_if_empty()
            .push(operation);

        Ok(url)
    }

    /// Check the HTTP status and return the response text.
    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(TransportError::ReadBody)?;

        if !status.is_success() {
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body)
            };
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }

    /// Send an already resolved request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "SveveClient::send_sms",
            skip_all,
            fields(
                recipients = request.recipients.len(),
                sender = %request.sender,
                ok_count = tracing::field::Empty,
            )
        )
    )]
    pub async fn send(&self, request: &SendRequest) -> Result<SendResult> {
        let url = self.operation_url(SEND_PATH)?;
        let body = SendMessageBody {
            user: self.credentials.user(),
            passwd: self.credentials.password(),
            to: request.recipients.joined(),
            from: &request.sender,
            msg: &request.message,
            f: "json",
        };

        let response = self.http_client.post(url).json(&body).send().await?;
        let text = Self::read_body(response).await?;

        let result = SendSmsResponse::from_text(&text)?.into_result()?;

        #[cfg(feature = "tracing")]
        {
            Span::current()
                .record("ok_count", result.ok_count)
                .set_status(Status::Ok);
        }

        Ok(result)
    }

    /// Query the remaining message credits.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "SveveClient::remaining_sms",
            skip_all,
            fields(balance = tracing::field::Empty)
        )
    )]
    pub async fn balance(&self) -> Result<Balance> {
        let mut url = self.operation_url(BALANCE_PATH)?;
        let params = [
            ("cmd", "sms_count"),
            ("user", self.credentials.user()),
            ("passwd", self.credentials.password()),
        ];
        url.set_query(Some(
            &serde_urlencoded::to_string(params).map_err(TransportError::BuildRequestUrl)?,
        ));

        let response = self.http_client.get(url).send().await?;
        let text = Self::read_body(response).await?;

        let balance = parse_balance(&text)?;

        #[cfg(feature = "tracing")]
        {
            Span::current()
                .record("balance", balance.credits())
                .set_status(Status::Ok);
        }

        Ok(balance)
    }
}

impl SmsClient for SveveClient {
    async fn send_sms<R>(&self, to: R, message: &str, sender: Option<&str>) -> Result<SendResult>
    where
        R: Into<Recipients> + Send,
    {
        let request = SendRequest::resolve(to, message, sender, &self.default_sender);
        self.send(&request).await
    }

    async fn remaining_sms(&self) -> Result<Balance> {
        self.balance().await
    }
}
