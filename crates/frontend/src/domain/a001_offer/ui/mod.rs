pub mod details;
pub mod earnings_button;
