use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub total_rows: i64,
    pub page: i64,
    pub page_size: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
}
