use super::Attachment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    /// May be empty
    pub recipient_name: String,
    pub recipient_email: String,

    pub subject: String,
    pub plain_text_body: String,
    pub html_body: String,

    pub attachments: Vec<Attachment>,

    /// Message-ID without angle brackets.
    /// Transport generates one when absent
    pub message_id: Option<String>,
}
