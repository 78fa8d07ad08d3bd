#[derive(Clone)]
pub struct TicketingServiceConfig {
    /// Shown in the subject and the body of the ticket mail
    pub event_name: String,
    /// Right-hand side of generated Message-IDs
    pub mail_domain: String,
}
