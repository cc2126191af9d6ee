use time::OffsetDateTime;
use tracing::trace;

use crate::codec::Codec;
use crate::error::CookieError;
use crate::record::SetCookie;

/// Trim a segment and split it on the first `=`.
///
/// No trimming happens around the `=` itself, so `foo = bar` keeps the
/// padding inside the name and value.
fn split_pair(segment: &str) -> (&str, Option<&str>) {
    let segment = segment.trim();
    match segment.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (segment, None),
    }
}

fn required<'a>(value: Option<&'a str>, error: CookieError) -> Result<&'a str, CookieError> {
    value.filter(|value| !value.is_empty()).ok_or(error)
}

impl SetCookie {
    /// Parse a `Set-Cookie` header value with the default percent codec.
    pub fn parse(header: &str) -> Result<Self, CookieError> {
        Self::parse_with(header, Codec::default())
    }

    /// Parse a `Set-Cookie` header value.
    ///
    /// The first segment must be a `key=value` pair with both sides
    /// non-empty after decoding. Remaining segments are matched by name
    /// case-insensitively and validated per attribute; names this crate
    /// does not recognize are skipped, so future attributes never break
    /// parsing.
    pub fn parse_with(header: &str, codec: Codec) -> Result<Self, CookieError> {
        let mut segments = header.split(';');

        // `split` always yields at least one segment, even for "".
        let first = segments.next().ok_or(CookieError::InvalidPair)?;
        let (raw_key, raw_value) = split_pair(first);
        let raw_value = raw_value.ok_or(CookieError::InvalidPair)?;
        if raw_key.is_empty() || raw_value.is_empty() {
            return Err(CookieError::InvalidPair);
        }

        let key = codec.decode(raw_key);
        let value = codec.decode(raw_value);
        if key.is_empty() || value.is_empty() {
            return Err(CookieError::InvalidPair);
        }

        let mut cookie = Self {
            key,
            value,
            expires: None,
            max_age: None,
            domain: None,
            path: None,
            secure: None,
            http_only: None,
            same_site: None,
            codec,
        };

        for segment in segments {
            let (name, value) = split_pair(segment);
            match name.to_ascii_lowercase().as_str() {
                "expires" => {
                    let text = value.ok_or(CookieError::InvalidExpires)?;
                    let parsed = httpdate::parse_http_date(text)
                        .map_err(|_| CookieError::InvalidExpires)?;
                    cookie.expires = Some(OffsetDateTime::from(parsed));
                }
                "max-age" => {
                    let text = value.ok_or(CookieError::InvalidMaxAge)?;
                    cookie.max_age =
                        Some(text.parse().map_err(|_| CookieError::InvalidMaxAge)?);
                }
                "domain" => {
                    cookie.domain =
                        Some(required(value, CookieError::InvalidDomain)?.to_owned());
                }
                "path" => {
                    cookie.path = Some(required(value, CookieError::InvalidPath)?.to_owned());
                }
                // Bare flags: any non-empty value is malformed, but a lone
                // trailing `=` is tolerated.
                "secure" => {
                    if value.is_some_and(|value| !value.is_empty()) {
                        return Err(CookieError::InvalidSecure);
                    }
                    cookie.secure = Some(true);
                }
                "httponly" => {
                    if value.is_some_and(|value| !value.is_empty()) {
                        return Err(CookieError::InvalidHttpOnly);
                    }
                    cookie.http_only = Some(true);
                }
                "samesite" => {
                    cookie.same_site =
                        Some(required(value, CookieError::InvalidSameSite)?.to_owned());
                }
                other => trace!(attribute = other, "skipping unrecognized attribute"),
            }
        }

        Ok(cookie)
    }

    /// Parse a batch of header values, applying the same codec to each.
    ///
    /// Fails on the first invalid header; no partial batch is returned.
    pub fn parse_many<I, S>(headers: I, codec: Codec) -> Result<Vec<Self>, CookieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        headers
            .into_iter()
            .map(|header| Self::parse_with(header.as_ref(), codec.clone()))
            .collect()
    }
}
