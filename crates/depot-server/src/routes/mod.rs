//! HTTP route handlers

pub mod access;
pub mod packages;
