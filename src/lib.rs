pub mod configuration;
pub mod connectors;
pub mod forms;
mod helpers;
pub mod matching;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod storage;
pub mod telemetry;
pub mod views;
