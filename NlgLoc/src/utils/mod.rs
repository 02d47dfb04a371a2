//! Utility functions

pub mod id;

pub use id::{display_id, parse_hex, parse_id_token, render_id};
