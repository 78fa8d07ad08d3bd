use serde::Deserialize;

///
/// Element of the array returned by create and update endpoints
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RecordId {
    #[serde(rename = "Id")]
    pub id: i64,
}
