//! Geographic math for the globe: locations, sphere projection and arcs.
//! Nothing in here touches the ECS, so it is all plain functions and types.

mod arc;
mod location;
mod projection;

pub use arc::ArcCurve;
pub use location::Location;
pub use projection::project;
