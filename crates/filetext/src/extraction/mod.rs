pub mod table;

#[cfg(feature = "csv")]
pub mod csv;

pub use table::Table;

#[cfg(feature = "csv")]
pub use self::csv::parse_csv;
