pub mod cd;
pub mod pwd;
pub mod exit;
