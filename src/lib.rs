//! Portfolio carousels: cyclic slide navigation with pausable autoplay, and
//! an egui front end that mounts them over the portfolio content.

pub mod carousel;
pub mod config;
pub mod content;
pub mod sections;
pub mod ui;
