pub mod error;
pub mod hmac_jwt;
pub mod noop;
pub mod ports;

pub use error::SigningError;
pub use hmac_jwt::HmacJwtSigner;
pub use noop::DisabledTokenSigner;
pub use ports::TokenSigner;
