pub mod enums;
pub mod errors;
pub mod filter;
pub mod path;
pub mod pattern;
pub mod route;
pub mod router;
pub mod types;

pub use enums::HttpMethod;
pub use errors::{RouterError, RouterResult};
pub use filter::{AlphaCase, FilterError, FilterRule};
pub use pattern::{CompiledPattern, PatternError, Token, VariableToken};
pub use route::{Parameters, Route, RouteId, RouteMatch, RouteOptions, RouteRequest};
pub use router::{DispatchContext, RouteGroup, RouteTable, Router, RouterOptions};
