//! Conversion rules shared by the value accessors
//!
//! This module holds the backend-independent pieces: boolean coercion policy
//! and checked numeric narrowing, parsing and rendering.

mod boolean;
pub(crate) mod numeric;

pub use boolean::BooleanCoercion;
pub use numeric::{parse_decimal, render_f32, render_f64};
