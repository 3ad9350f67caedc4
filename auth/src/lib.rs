//! Authentication infrastructure for the shelter backend.
//!
//! Wraps the two external collaborators every request flow leans on:
//! - Password hashing (Argon2id, PHC string format)
//! - Bearer token minting and validation (HS256)
//!
//! The service keeps its own role/ownership rules; this crate only knows how
//! to hash, verify, sign, and decode.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and mint a 6-hour token carrying {id, role}
//! let claims = Claims::for_user("user123", "Admin", 6);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Gate: validate the bearer token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.role, "Admin");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
