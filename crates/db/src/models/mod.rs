//! Row models and input DTOs.

pub mod project;
