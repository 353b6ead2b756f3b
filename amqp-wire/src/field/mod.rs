//! Field values, field tables and field arrays
mod read;
mod type_marker;
mod write;

pub(crate) use type_marker::TypeMarker;
