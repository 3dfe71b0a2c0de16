//! Signed bearer token creation and validation.

mod claims;
mod decoder;
mod encoder;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;
