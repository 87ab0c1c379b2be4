//! HTTP route handlers.
//!
//! This module contains all the handlers for the Receipt API.

pub mod health;
pub mod receipts;
