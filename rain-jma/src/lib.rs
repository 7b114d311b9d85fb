pub mod error;
pub mod measurement;
pub mod month_key;
pub mod series;
