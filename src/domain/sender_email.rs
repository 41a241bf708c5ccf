use validator::ValidateEmail;

#[derive(Debug)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: &str) -> Result<SenderEmail, String> {
        if s.validate_email() {
            Ok(Self(s.into()))
        } else {
            tracing::warn!("`{s}` is not a valid sender email.");
            Err(format!("`{s}` is not a valid sender email."))
        }
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
