//! Shared helpers for the core services

pub mod validation;
