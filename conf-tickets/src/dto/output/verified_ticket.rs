use crate::repository::Ticketing;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerifiedTicket {
    pub email: String,
    pub student: bool,
}

impl From<Ticketing> for VerifiedTicket {
    fn from(value: Ticketing) -> Self {
        Self {
            email: value.email,
            student: value.student,
        }
    }
}
