pub mod banner;
pub mod client;
pub mod commands;
pub mod config;
pub mod consts;
pub mod controller;
pub mod logging;
pub mod render;
pub mod session;
pub mod spinner;
