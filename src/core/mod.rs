//! Core phone-link logic
//!
//! Number normalization, clipboard phone detection and deep link
//! construction. Everything here is pure and synchronous.

pub mod deep_link;
pub mod detect;
pub mod phone;

pub use deep_link::{build_deep_link, DEFAULT_LINK_BASE};
pub use detect::{looks_like_phone_number, PhoneDetector};
pub use phone::{PhoneNormalizer, DEFAULT_COUNTRY_CODE};
