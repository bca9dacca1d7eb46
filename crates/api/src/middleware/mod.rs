//! Request guards.
//!
//! - [`api_key::RequireApiKey`] -- Rejects requests without the shared `?api_key=` secret.

pub mod api_key;
