pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod deck;
pub mod engine;
pub mod error;
pub mod events;
pub mod model;
pub mod prompts;
pub mod reading;
pub mod render;
pub mod selector;
pub mod server;
pub mod session;
pub mod spinner;
