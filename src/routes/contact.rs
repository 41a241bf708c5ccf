use std::fmt::Debug;

use actix_web::{
    http::{header::ContentType, StatusCode},
    web, HttpResponse, ResponseError,
};
use anyhow::Context;
use askama::Template;

use crate::{
    domain::ContactField,
    email_client::EmailJsClient,
    relay::RelayConfig,
    submission::{SubmissionController, SubmitError},
    util::error_chain_fmt,
};

use super::HomeTemplate;

#[derive(serde::Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[tracing::instrument(
    name = "收到联系表单",
    skip(form, email_client, relay_config),
    fields(
        %form.name,
        %form.email
    )
)]
pub async fn contact(
    form: web::Form<FormData>,
    email_client: web::Data<EmailJsClient>,
    relay_config: web::Data<RelayConfig>,
) -> Result<HttpResponse, ContactError> {
    let FormData {
        name,
        email,
        message,
    } = form.0;

    let mut controller = SubmissionController::default();
    controller.update_field(ContactField::Name, name);
    controller.update_field(ContactField::Email, email);
    controller.update_field(ContactField::Message, message);
    let sender_email = controller
        .form()
        .validate()
        .map_err(ContactError::ValidationError)?;
    // 发送与校验相同的邮箱地址
    controller.update_field(ContactField::Email, sender_email.as_ref());

    // 失败原因已在`submit`中记录，这里只决定响应状态码
    let status_code = match controller
        .submit(email_client.get_ref(), relay_config.get_ref())
        .await
    {
        Ok(()) => StatusCode::OK,
        Err(SubmitError::ConfigurationMissing) => StatusCode::SERVICE_UNAVAILABLE,
        Err(SubmitError::DeliveryFailed(_)) => StatusCode::BAD_GATEWAY,
    };

    let body = HomeTemplate::new(&controller)
        .render()
        .context("failed to render the contact section.")?;

    Ok(HttpResponse::build(status_code)
        .content_type(ContentType::html())
        .body(body))
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
