//! Utility functions used across the application.
//!
//! - [`url_normalizer`] - Input URL cleanup and validation
//! - [`code_generator`] - Random codes for demo links
//! - [`concealed_link`] - Cosmetic link labels

pub mod code_generator;
pub mod concealed_link;
pub mod url_normalizer;
