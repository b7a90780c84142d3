//! The components module contains all shared components for our app.

pub mod bank_logo;
pub mod pico;
