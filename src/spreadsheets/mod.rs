pub mod export_xlsx;

pub use export_xlsx::listings_workbook;
