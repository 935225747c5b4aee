pub mod app;
pub mod controls_panel;
pub mod legend;
pub mod legend_panel;
pub mod stats_panel;
pub mod viewport_image;
