pub mod dashboard;
pub mod status_line;
pub mod typing_area;
