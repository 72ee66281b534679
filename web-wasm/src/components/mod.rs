pub mod header;
pub mod upload_area;
pub mod status;
pub mod results_section;
