use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantEmail {
    pub email: String,
}
