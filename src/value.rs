use serde_json::Value;
use time::OffsetDateTime;

use crate::codec::Codec;
use crate::error::CookieError;
use crate::record::{SetCookie, SetCookieParts};

fn string_field(fields: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_owned)
}

impl SetCookie {
    /// Construct records from untyped input.
    ///
    /// Accepts a header string, an object of fields, or a (possibly nested)
    /// array of either, always yielding a flat batch. Strings go through
    /// [`SetCookie::parse_with`] and objects through
    /// [`SetCookie::from_parts`], so each path keeps its own validation
    /// rules: on the object path only `key` and `value` are checked, and
    /// attribute fields of the wrong JSON type are dropped rather than
    /// rejected. Any other JSON type fails with
    /// [`CookieError::InvalidInputType`].
    pub fn from_value(input: &Value, codec: &Codec) -> Result<Vec<Self>, CookieError> {
        match input {
            Value::String(header) => Ok(vec![Self::parse_with(header, codec.clone())?]),
            Value::Array(items) => {
                let mut cookies = Vec::with_capacity(items.len());
                for item in items {
                    cookies.extend(Self::from_value(item, codec)?);
                }
                Ok(cookies)
            }
            Value::Object(fields) => {
                let parts = SetCookieParts {
                    key: string_field(fields, "key"),
                    value: string_field(fields, "value"),
                    expires: fields
                        .get("expires")
                        .and_then(Value::as_str)
                        .and_then(|text| httpdate::parse_http_date(text).ok())
                        .map(OffsetDateTime::from),
                    max_age: fields.get("maxAge").and_then(Value::as_i64),
                    domain: string_field(fields, "domain"),
                    path: string_field(fields, "path"),
                    secure: fields.get("secure").and_then(Value::as_bool),
                    http_only: fields.get("httpOnly").and_then(Value::as_bool),
                    same_site: string_field(fields, "sameSite"),
                };
                Ok(vec![Self::from_parts(parts, codec.clone())?])
            }
            _ => Err(CookieError::InvalidInputType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_input_parses_one_record() {
        let cookies = SetCookie::from_value(&json!("foo=bar; Secure"), &Codec::default()).unwrap();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].key, "foo");
        assert_eq!(cookies[0].secure, Some(true));
    }

    #[test]
    fn object_input_validates_key_and_value_only() {
        let err = SetCookie::from_value(&json!({ "value": "bar" }), &Codec::default()).unwrap_err();
        assert_eq!(err, CookieError::InvalidKey);

        let err = SetCookie::from_value(&json!({ "key": "foo" }), &Codec::default()).unwrap_err();
        assert_eq!(err, CookieError::InvalidValue);

        // Attribute fields of the wrong type are dropped, never an error.
        let cookies = SetCookie::from_value(
            &json!({ "key": "foo", "value": "bar", "maxAge": "not a number" }),
            &Codec::default(),
        )
        .unwrap();
        assert_eq!(cookies[0].max_age, None);
    }

    #[test]
    fn object_input_carries_attributes() {
        let cookies = SetCookie::from_value(
            &json!({
                "key": "foo",
                "value": "bar",
                "expires": "Wed, 21 Oct 2015 07:28:00 GMT",
                "maxAge": 100,
                "domain": "example.com",
                "path": "/",
                "secure": true,
                "httpOnly": true,
                "sameSite": "Strict",
            }),
            &Codec::default(),
        )
        .unwrap();
        let cookie = &cookies[0];
        assert_eq!(cookie.expires.unwrap().unix_timestamp(), 1_445_412_480);
        assert_eq!(cookie.max_age, Some(100));
        assert_eq!(cookie.domain.as_deref(), Some("example.com"));
        assert_eq!(cookie.path.as_deref(), Some("/"));
        assert_eq!(cookie.secure, Some(true));
        assert_eq!(cookie.http_only, Some(true));
        assert_eq!(cookie.same_site.as_deref(), Some("Strict"));
    }

    #[test]
    fn array_input_yields_a_flat_batch() {
        let cookies = SetCookie::from_value(
            &json!(["foo=bar", { "key": "baz", "value": "buz" }, ["qux=quux"]]),
            &Codec::default(),
        )
        .unwrap();
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies[0].key, "foo");
        assert_eq!(cookies[1].key, "baz");
        assert_eq!(cookies[2].key, "qux");
    }

    #[test]
    fn scalar_input_of_another_type_is_rejected() {
        for input in [json!(1), json!(true), json!(null)] {
            assert_eq!(
                SetCookie::from_value(&input, &Codec::default()).unwrap_err(),
                CookieError::InvalidInputType
            );
        }
    }

    #[test]
    fn array_failure_aborts_the_whole_batch() {
        let err =
            SetCookie::from_value(&json!(["foo=bar", 2]), &Codec::default()).unwrap_err();
        assert_eq!(err, CookieError::InvalidInputType);
    }
}
