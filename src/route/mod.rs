mod constraint;
mod matched;
mod options;
mod params;
mod record;
mod request;

pub use constraint::ConstraintSet;
pub use matched::RouteMatch;
pub use options::{RouteOptions, RouteOptionsBuilder};
pub use params::Parameters;
pub use record::{Route, RouteId};
pub use request::RouteRequest;
