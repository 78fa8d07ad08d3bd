pub struct SmtpMailServiceConfig {
    pub hostname: String,
    pub port: u16,

    /// Without credentials mail is relayed without TLS and authentication
    pub username: Option<String>,
    pub password: Option<String>,

    pub from: String,
    pub from_name: String,
}
