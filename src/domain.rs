mod contact_field;
mod contact_form;
mod sender_email;
mod submission_status;

pub use contact_field::ContactField;
pub use contact_form::ContactForm;
pub use sender_email::SenderEmail;
pub use submission_status::SubmissionStatus;
