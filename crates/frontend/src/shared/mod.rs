pub mod components;
pub mod data;
pub mod icons;
pub mod markdown;
pub mod navigation;
