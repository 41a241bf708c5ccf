use std::future::Future;

use crate::domain::ContactForm;

/// 所有联系表单邮件的固定收件人
pub const RECIPIENT_EMAIL: &str = "sakshamvkhare@gmail.com";

/// 邮件中继所需的三个标识
/// 任意一项缺失时不会发起网络请求
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|id| !id.trim().is_empty())
    }
}

/// 发送给邮件模板的参数
#[derive(serde::Serialize, Debug, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub reply_to: &'a str,
    pub message: &'a str,
    pub to_email: &'a str,
}

impl<'a> From<&'a ContactForm> for TemplateParams<'a> {
    fn from(form: &'a ContactForm) -> Self {
        Self {
            from_name: &form.name,
            reply_to: &form.email,
            message: &form.message,
            to_email: RECIPIENT_EMAIL,
        }
    }
}

/// 实际投递邮件的外部服务
/// 重试、排队与超时均由实现方负责
pub trait MailRelay {
    fn send(
        &self,
        config: &RelayConfig,
        params: &TemplateParams<'_>,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
