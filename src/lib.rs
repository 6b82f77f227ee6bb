pub mod ai;
pub mod app;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod tasks;
