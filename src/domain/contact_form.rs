use super::{ContactField, SenderEmail};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 第一个去除空白后为空的字段
    fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// 服务端对应浏览器`required`与`type="email"`的校验
    /// 返回去除首尾空白后的发件人邮箱
    pub fn validate(&self) -> Result<SenderEmail, String> {
        if let Some(field) = self.missing_field() {
            return Err(format!("`{}` is required.", field.as_str()));
        }
        SenderEmail::parse(self.email.trim())
    }
}
