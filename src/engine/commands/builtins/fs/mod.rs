pub mod ls;
pub mod mkdir;
pub mod rm;
