pub mod upload_area;
