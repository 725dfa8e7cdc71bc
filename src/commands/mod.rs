mod create_record;
mod delete_record;
mod update_record;

pub use create_record::*;
pub use delete_record::*;
pub use update_record::*;
