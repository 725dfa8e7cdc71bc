pub mod openapi;
pub mod records;
