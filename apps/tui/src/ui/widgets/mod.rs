pub mod charts;
pub mod map;
pub mod palette;
pub mod popup;
pub mod tables;
