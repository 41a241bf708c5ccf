use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use portfolio::{email_client::EmailJsClient, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    telemetry::init_subscriber("portfolio");

    let config = portfolio::config::config().context("failed to read config.yaml.")?;
    let listener = TcpListener::bind(config.web.server_address())
        .with_context(|| format!("failed to bind {}.", config.web.server_address()))?;

    // 中继标识缺失不阻止启动，提交时会返回提示
    if !config.relay.is_complete() {
        tracing::warn!("email relay is not configured, contact form submissions will fail.");
    }

    let email_client = web::Data::new(EmailJsClient::from_config(&config)?);
    let relay_config = web::Data::new(config.relay);

    portfolio::run(listener, email_client, relay_config)?.await?;

    Ok(())
}
