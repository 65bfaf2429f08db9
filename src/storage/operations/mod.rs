// Storage operation traits and implementations
pub mod delete;
pub mod list;
pub mod mkdir;
pub mod stat;

pub use delete::Deleter;
pub use list::Lister;
pub use mkdir::Mkdirer;
pub use stat::Stater;
