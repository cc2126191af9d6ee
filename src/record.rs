use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::codec::Codec;
use crate::error::CookieError;

/// IMF-fixdate, the HTTP-date form `Expires` is rendered in. Formatting
/// goes through `time` so the whole `OffsetDateTime` range is renderable,
/// pre-1970 expiries included.
const IMF_FIXDATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// A single `Set-Cookie` directive.
///
/// Key and value are always present and non-empty; every other field is
/// either unset or holds a value that was validated on construction. Fields
/// are independent of each other. Direct mutation after construction is
/// possible and not re-validated.
///
/// `secure` and `http_only` are optional booleans rather than plain flags:
/// serialization checks presence, not truth, so `Some(false)` still emits
/// `Secure`. This mirrors how the wire format works, where the attribute
/// either appears or it does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookie {
    pub key: String,
    pub value: String,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    /// Decode/encode pair supplied at construction. Not data; skipped by
    /// serde and ignored by equality.
    #[serde(skip)]
    pub codec: Codec,
}

/// Structured input for [`SetCookie::from_parts`].
///
/// Only `key` and `value` are validated; the attribute fields are copied
/// through verbatim. The caller is trusted to supply well-formed values,
/// which the field types enforce at compile time. This is deliberately
/// looser than string parsing, where every attribute is checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetCookieParts {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
    pub max_age: Option<i64>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: Option<bool>,
    pub http_only: Option<bool>,
    pub same_site: Option<String>,
}

impl SetCookie {
    /// Build a record from pre-structured fields, bypassing string parsing.
    ///
    /// Fails with [`CookieError::InvalidKey`] or [`CookieError::InvalidValue`]
    /// when the respective field is missing or empty; no other field is
    /// validated here.
    pub fn from_parts(parts: SetCookieParts, codec: Codec) -> Result<Self, CookieError> {
        let key = parts
            .key
            .filter(|key| !key.is_empty())
            .ok_or(CookieError::InvalidKey)?;
        let value = parts
            .value
            .filter(|value| !value.is_empty())
            .ok_or(CookieError::InvalidValue)?;

        Ok(Self {
            key,
            value,
            expires: parts.expires,
            max_age: parts.max_age,
            domain: parts.domain,
            path: parts.path,
            secure: parts.secure,
            http_only: parts.http_only,
            same_site: parts.same_site,
            codec,
        })
    }
}

impl PartialEq for SetCookie {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.expires == other.expires
            && self.max_age == other.max_age
            && self.domain == other.domain
            && self.path == other.path
            && self.secure == other.secure
            && self.http_only == other.http_only
            && self.same_site == other.same_site
    }
}

impl Eq for SetCookie {}

impl fmt::Display for SetCookie {
    /// Canonical `Set-Cookie` value: the encoded `key=value` pair first,
    /// then the attributes in fixed order, joined by `"; "`. Only key and
    /// value pass through the encoder; attribute values are emitted
    /// verbatim, mirroring the decode asymmetry on the parse side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.codec.encode(&self.key),
            self.codec.encode(&self.value)
        )?;

        if let Some(expires) = self.expires {
            let expires = expires
                .to_offset(UtcOffset::UTC)
                .format(IMF_FIXDATE)
                .map_err(|_| fmt::Error)?;
            write!(f, "; Expires={expires}")?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={max_age}")?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        if let Some(path) = &self.path {
            write!(f, "; Path={path}")?;
        }
        if self.secure.is_some() {
            f.write_str("; Secure")?;
        }
        if self.http_only.is_some() {
            f.write_str("; HttpOnly")?;
        }
        if let Some(same_site) = &self.same_site {
            write!(f, "; SameSite={same_site}")?;
        }

        Ok(())
    }
}
