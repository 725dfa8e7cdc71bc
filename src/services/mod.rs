pub mod record_store;
pub mod spreadsheet_loader;
