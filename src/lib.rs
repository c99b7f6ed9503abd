// Library exports for integration testing
pub mod app;
pub mod cli;
pub mod constants;
pub mod error;
pub mod github;
pub mod store;
pub mod tasks;
pub mod types;
pub mod ui;
