pub mod sales_record;

pub use sales_record::*;
