pub mod diagnose_button;
pub mod footer;
pub mod header;
pub mod image_preview;
pub mod result_panel;
pub mod treatment_pager;
pub mod upload_area;
