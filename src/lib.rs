//! Staff admin panel of the school payroll system: employee and salary views
//! served by an actix-web host on top of the payroll backend's REST api.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod panel;
pub mod routes;
pub mod utils;
pub mod view;

#[cfg(test)]
mod testing;
