pub mod config;
pub mod entities;
pub mod errors;
pub mod guards;
pub mod handlers;
pub mod ids;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
