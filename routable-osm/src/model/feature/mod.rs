pub mod highway;
pub mod route_type;
