pub mod help;
pub mod clear;
