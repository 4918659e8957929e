//! Domain entities and value objects for the gateway.

pub mod entities;
pub mod value_objects;
