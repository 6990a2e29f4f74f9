//! Entities

pub mod profile;
