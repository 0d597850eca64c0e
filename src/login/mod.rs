//! Login error translation
//!
//! Turns native backend failures into the standardized login error handed
//! to the embedding login framework.

pub mod translator;

pub use translator::native_to_login_error;
