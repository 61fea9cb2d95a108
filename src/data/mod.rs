pub mod filter;
pub mod loader;
pub mod point;
pub mod scale;
pub mod tooltip;
pub mod view_transform;
