//! # setcookie
//!
//! Parser and serializer for HTTP `Set-Cookie` header values.
//!
//! `setcookie` turns a raw header value into a [`SetCookie`] record of the
//! cookie's key, value, and attributes, and turns a record back into the
//! canonical wire string. Pre-structured input can be supplied directly via
//! [`SetCookie::from_parts`], bypassing string parsing.
//!
//! ## Quick Start
//!
//! ```rust
//! use setcookie::SetCookie;
//!
//! let cookie = SetCookie::parse("sid=abc123; Path=/; Secure; HttpOnly")?;
//! assert_eq!(cookie.key, "sid");
//! assert_eq!(cookie.path.as_deref(), Some("/"));
//! assert_eq!(cookie.to_string(), "sid=abc123; Path=/; Secure; HttpOnly");
//! # Ok::<(), setcookie::CookieError>(())
//! ```
//!
//! ## Design
//!
//! - **Fail fast, whole record or nothing**: every attribute on the string
//!   path is validated while parsing, and the first invalid one aborts with
//!   a specific [`CookieError`] variant. There is no "present but invalid"
//!   field on a constructed record.
//! - **Asymmetric trust**: string input validates every attribute;
//!   structured input ([`SetCookie::from_parts`]) validates only key and
//!   value and copies the rest through verbatim.
//! - **Pluggable codec**: key and value pass through a decode/encode pair
//!   ([`Codec`]) held by the record; the default percent-codec can be
//!   replaced per construction. Attribute values are never re-encoded.
//! - **Forward compatible**: attribute names this crate does not recognize
//!   are skipped, not rejected.
//!
//! This crate is not a cookie jar: it does no expiry enforcement, no
//! request-URL matching, and no storage.
//!
//! ## Modules
//!
//! - [`codec`] - the pluggable decode/encode pair for key and value
//! - [`error`] - the construction failure taxonomy
//! - [`record`] - the [`SetCookie`] record and its serialization

pub mod codec;
pub mod error;
pub mod record;

mod parse;
mod value;

pub use codec::{Codec, CodecFn};
pub use error::CookieError;
pub use record::{SetCookie, SetCookieParts};
