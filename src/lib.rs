//! GreenWheelStation chatbot API - Library exports for testing
//!
//! (c) GreenWheelStation 2025

pub mod api;
pub mod core;
pub mod infrastructure;
