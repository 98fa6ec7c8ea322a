mod context;
mod group;
mod options;
mod service;
mod table;

pub use context::DispatchContext;
pub use group::RouteGroup;
pub use options::{RouterOptions, RouterOptionsBuilder};
pub use service::Router;
pub use table::RouteTable;
