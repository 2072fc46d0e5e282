//! Request and response bodies that exist only at the HTTP boundary.

pub mod request;
pub mod response;
