//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, IssuedToken, JwtService};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
    MAX_PASSWORD_LEN, MIN_PASSWORD_LEN,
};
