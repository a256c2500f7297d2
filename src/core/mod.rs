pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dropdown;
pub mod models;
pub mod probe;
pub mod recommendations;
pub mod report;
pub mod util;
