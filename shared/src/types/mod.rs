//! Common wire types shared between the core and the API layer

pub mod response;

pub use response::ErrorResponse;
