//! Data Transfer Objects

pub mod insurance;
