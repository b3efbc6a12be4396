//! Shared authentication library
//!
//! Reusable authentication infrastructure for independently deployed services:
//! - Password hashing (bcrypt, salted, self-describing hashes)
//! - Signed bearer token encoding and validation
//! - Stateless token verification for resource services
//! - Ownership checks binding resources to the authenticated identity
//!
//! The credential-issuing service and every resource service depend on this
//! crate; their only runtime coupling is the shared signing secret. Verifying
//! a token never requires a call back to the issuer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Identity, TokenCodec, TokenVerifier};
//! use chrono::Duration;
//! use jsonwebtoken::Algorithm;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//! let token = codec.encode(Identity(42), Duration::minutes(30)).unwrap();
//!
//! let verifier = TokenVerifier::new(codec);
//! assert_eq!(verifier.authenticate(&token).unwrap(), Identity(42));
//! ```

pub mod identity;
pub mod ownership;
pub mod password;
pub mod token;
pub mod verifier;

pub use identity::Identity;
pub use ownership::Forbidden;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use verifier::TokenVerifier;
pub use verifier::Unauthenticated;
