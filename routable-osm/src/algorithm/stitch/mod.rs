mod route;
mod route_member;
mod route_stitch;
mod stitch_ops;
mod transit_edge;
mod traversal_direction;

pub use route::Route;
pub use route_member::{RouteMember, TraversalRole};
pub use route_stitch::RouteStitch;
pub use stitch_ops::{stitch_route, stitch_routes, StitchResult};
pub use transit_edge::TransitEdge;
pub use traversal_direction::TraversalDirection;
