pub mod adjust;
pub mod checker;
pub mod color;
pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod wcag;
