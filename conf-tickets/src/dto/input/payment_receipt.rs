///
/// Built from multipart form with fields `email` and `photo`.
/// Content type is taken from the `photo` part
///
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub email: String,
    pub photo: Vec<u8>,
    pub content_type: String,
}
