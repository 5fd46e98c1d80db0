//! Persistence for the pipeline's two data files
//!
//! The scrape stage hands its results to the analysis stage through exactly
//! one file: the category index JSON. The analysis stage additionally
//! writes the cleaned flat table as CSV.

mod csv_out;
mod json;

pub use csv_out::write_cleaned_table;
pub use json::{load_category_index, write_category_index};
