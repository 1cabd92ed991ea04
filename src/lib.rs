pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod mvi;
pub mod pack;
pub mod service;
pub mod ui;
