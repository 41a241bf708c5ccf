use std::fmt::Debug;

use tokio::sync::watch;

use crate::{
    domain::{ContactField, ContactForm, SubmissionStatus},
    relay::{MailRelay, RelayConfig, TemplateParams},
    util::error_chain_fmt,
};

pub const CONFIGURATION_MISSING_MESSAGE: &str = "Email service is not configured yet.";
pub const SUCCESS_MESSAGE: &str = "Thanks! I will get back to you shortly.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// 持有联系表单与提交状态，负责把表单交给邮件中继并记录结果
///
/// 每次`submit`结束后状态一定是`Success`或`Failed`；
/// 等待中继响应期间状态为`Pending`，调用方需禁用提交按钮
pub struct SubmissionController {
    form: ContactForm,
    status: watch::Sender<SubmissionStatus>,
    message: Option<&'static str>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            status: watch::Sender::new(SubmissionStatus::Idle),
            message: None,
        }
    }
}

impl SubmissionController {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// 订阅状态变化，渲染层可借此观察到`Pending`
    pub fn watch_status(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    #[tracing::instrument(
        name = "提交联系表单",
        skip_all,
        fields(
            from_name = %self.form.name,
            reply_to = %self.form.email,
        )
    )]
    pub async fn submit<R: MailRelay>(
        &mut self,
        relay: &R,
        config: &RelayConfig,
    ) -> Result<(), SubmitError> {
        // 配置缺失时直接失败，不发起网络请求
        if !config.is_complete() {
            let e = SubmitError::ConfigurationMissing;
            tracing::warn!("{e}");
            self.transition(SubmissionStatus::Failed, Some(CONFIGURATION_MISSING_MESSAGE));
            return Err(e);
        }

        self.transition(SubmissionStatus::Pending, None);
        let result = relay.send(config, &TemplateParams::from(&self.form)).await;

        match result {
            Ok(()) => {
                tracing::info!("contact form delivered.");
                self.form.clear();
                self.transition(SubmissionStatus::Success, Some(SUCCESS_MESSAGE));
                Ok(())
            }
            Err(e) => {
                let e = SubmitError::DeliveryFailed(e);
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "contact form delivery failed."
                );
                // 保留表单内容，用户可直接重试
                self.transition(SubmissionStatus::Failed, Some(DELIVERY_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    fn transition(&mut self, status: SubmissionStatus, message: Option<&'static str>) {
        self.message = message;
        self.status.send_replace(status);
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{}", CONFIGURATION_MISSING_MESSAGE)]
    ConfigurationMissing,
    #[error("{}", DELIVERY_FAILED_MESSAGE)]
    DeliveryFailed(#[source] anyhow::Error),
}

impl Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
