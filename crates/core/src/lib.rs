//! Domain logic shared by the repository and HTTP layers.
//!
//! Nothing in here touches the network or the database: sort expression
//! parsing, page arithmetic, decimal amounts and attribute validation are all
//! pure functions.

pub mod decimal;
pub mod error;
pub mod pagination;
pub mod sorting;
pub mod types;
pub mod validation;
