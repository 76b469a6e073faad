pub mod chart_canvas;
pub mod logging;
pub mod page_data;
pub mod view_model;
