pub mod interpreter;
pub mod platform;
