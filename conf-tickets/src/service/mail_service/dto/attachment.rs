#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDisposition {
    /// Part of the message body, referenced from HTML as `cid:<content_id>`
    Inline,
    Attachment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub content_type: String,
    pub disposition: ContentDisposition,
    /// Used only by inline attachments
    pub content_id: String,
    pub payload: Vec<u8>,
}
