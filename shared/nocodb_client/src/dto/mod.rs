mod list_table_records_options;
mod page_info;
mod record_id;
mod sort;
mod where_clause;

pub use list_table_records_options::ListTableRecordsOptions;
pub use page_info::PageInfo;
pub use record_id::RecordId;
pub use sort::Sort;
pub use where_clause::{Comparison, Where};
