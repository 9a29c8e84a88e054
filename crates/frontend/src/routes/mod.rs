pub mod params;
pub mod routes;
