pub mod header;
pub mod settings_panel;
pub mod upload_area;
pub mod progress_bar;
pub mod results_table;
pub mod export_buttons;
