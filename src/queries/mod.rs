mod get_all_records;
mod get_record;

pub use get_all_records::*;
pub use get_record::*;
