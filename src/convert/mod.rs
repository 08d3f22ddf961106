//! Mapping and coercion
//!
//! - [`coercion`]: resolves one source field into a declared scalar type
//! - [`engine`]: applies a whole mapping configuration to an input document
//! - [`datetime`]: permissive date-time parsing used by the resolver

pub mod coercion;
pub mod datetime;
pub mod engine;

pub use coercion::{coerce, resolve};
pub use datetime::{ParsedDateTime, parse_datetime};
pub use engine::{build_output, map_document};
