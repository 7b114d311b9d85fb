pub mod monthly;
pub mod year_table;
