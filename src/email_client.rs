use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use crate::relay::{MailRelay, RelayConfig, TemplateParams};

/// EmailJS REST API 客户端
pub struct EmailJsClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
    access_token: Option<SecretString>,
}

impl EmailJsClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        access_token: Option<SecretString>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build email client.")?;
        let base_url = reqwest::Url::parse(base_url)
            .with_context(|| format!("failed to parse base url `{base_url}`."))?;

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    pub fn from_config(config: &crate::config::Config) -> anyhow::Result<Self> {
        let email_client_config = &config.email_client;

        Self::new(
            &email_client_config.base_url,
            email_client_config.timeout(),
            email_client_config.access_token.clone(),
        )
    }
}

impl MailRelay for EmailJsClient {
    #[tracing::instrument(
        name = "sending email",
        skip_all,
        fields(
            service_id = %config.service_id,
            template_id = %config.template_id,
        )
    )]
    async fn send(&self, config: &RelayConfig, params: &TemplateParams<'_>) -> anyhow::Result<()> {
        let url = self
            .base_url
            .join("/api/v1.0/email/send")
            .context("failed to build send url.")?;
        let body = SendRequestBody {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
            access_token: self.access_token.as_ref().map(|t| t.expose_secret()),
        };

        self.client
            .post(url)
            .json(&body)
            .send()
            .await
            .context("failed to reach the email service.")?
            .error_for_status()
            .context("the email service rejected the request.")?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendRequestBody<'a, 'b> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams<'b>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}
