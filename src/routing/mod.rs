//! Routing module
//!
//! Maps request paths to the fixed set of worker bee routes.
//! Matching is exact on the path; anything unknown resolves to `NotFound`.

mod table;

pub use table::{Route, RouteTable};
