//! API module: HTTP wiring, authentication and REST handlers

pub mod auth;
pub mod context;
pub mod http;
pub mod rest;
pub mod state;
