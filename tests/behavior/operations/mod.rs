pub mod list;
pub mod mkdir;
pub mod resolve;
