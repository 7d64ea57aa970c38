// Domain entities

pub mod event;
pub mod page;
pub mod query;
pub mod runtime_config;

pub use event::*;
pub use page::*;
pub use query::*;
pub use runtime_config::*;
