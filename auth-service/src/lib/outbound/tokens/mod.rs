pub mod jwt;

pub use jwt::JwtSessionTokens;
