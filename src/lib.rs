pub mod config;
pub mod content;
pub mod domain;
pub mod email_client;
pub mod relay;
mod routes;
mod startup;
pub mod submission;
pub mod telemetry;
mod util;

pub use startup::run;
