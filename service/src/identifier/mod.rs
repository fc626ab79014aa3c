//! Identifier grammar and dispatch.
//!
//! Identifiers have the shape `congress-gov://collection/seg1/.../[sub][?query]`
//! (the scheme prefix is optional). Parsing happens in two stages:
//!
//! - [`IdentifierParts::parse`] splits the raw string into a collection tag,
//!   ordered path segments, and a decoded query map — no field semantics yet.
//! - [`dispatcher::resolve`] runs the parts through the collection's pattern
//!   table and the field validators, producing a [`TypedRequest`].
//!
//! Failure kinds are deliberately distinct: a string whose shape no pattern
//! recognizes is an `InvalidIdentifier`; a recognized shape whose field value
//! is out of range is an `InvalidParameter`.

pub mod dispatcher;
pub mod request;

pub use dispatcher::{resolve, ResolvedRequest};
pub use request::TypedRequest;

use std::collections::BTreeMap;

use crate::error::GatewayError;

/// Accepted (optional) scheme prefix on incoming identifiers.
pub const SCHEME_PREFIX: &str = "congress-gov://";

/// An identifier split into its syntactic parts, before any field
/// validation. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierParts {
    /// First path segment, lowercased.
    pub collection: String,
    /// Remaining path segments, verbatim.
    pub segments: Vec<String>,
    /// Decoded query parameters; duplicate keys keep the last value.
    pub query: BTreeMap<String, String>,
}

impl IdentifierParts {
    /// Split an identifier string into collection, segments, and query.
    ///
    /// # Errors
    /// `InvalidIdentifier` on an empty path, empty path segments, malformed
    /// query pairs, or undecodable percent-escapes.
    pub fn parse(identifier: &str) -> Result<Self, GatewayError> {
        let rest = identifier
            .strip_prefix(SCHEME_PREFIX)
            .unwrap_or(identifier);

        let (path, query_str) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        if path.is_empty() {
            return Err(GatewayError::InvalidIdentifier(
                "identifier has an empty path".to_string(),
            ));
        }

        let mut raw_segments = path.split('/');
        let collection = raw_segments
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if collection.is_empty() {
            return Err(GatewayError::InvalidIdentifier(
                "identifier has an empty collection".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for segment in raw_segments {
            if segment.is_empty() {
                return Err(GatewayError::InvalidIdentifier(format!(
                    "identifier '{identifier}' contains an empty path segment"
                )));
            }
            segments.push(segment.to_string());
        }

        let mut query = BTreeMap::new();
        if let Some(query_str) = query_str {
            for pair in query_str.split('&').filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').ok_or_else(|| {
                    GatewayError::InvalidIdentifier(format!(
                        "malformed query pair '{pair}'"
                    ))
                })?;
                let key = decode(key)?;
                let value = decode(value)?;
                if key.is_empty() {
                    return Err(GatewayError::InvalidIdentifier(format!(
                        "query pair '{pair}' has an empty key"
                    )));
                }
                query.insert(key, value);
            }
        }

        Ok(Self {
            collection,
            segments,
            query,
        })
    }
}

fn decode(raw: &str) -> Result<String, GatewayError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| {
            GatewayError::InvalidIdentifier(format!("query component '{raw}' is not valid UTF-8"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_and_schemeless_forms_identically() {
        let with = IdentifierParts::parse("congress-gov://bill/118/hr/1").unwrap();
        let without = IdentifierParts::parse("bill/118/hr/1").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.collection, "bill");
        assert_eq!(with.segments, vec!["118", "hr", "1"]);
    }

    #[test]
    fn collection_is_lowercased_but_segments_are_verbatim() {
        let parts = IdentifierParts::parse("MEMBER/p000197").unwrap();
        assert_eq!(parts.collection, "member");
        assert_eq!(parts.segments, vec!["p000197"]);
    }

    #[test]
    fn query_pairs_are_decoded() {
        let parts =
            IdentifierParts::parse("bill/118/hr/1?limit=20&fromDateTime=2023-01-01T00%3A00%3A00Z")
                .unwrap();
        assert_eq!(parts.query.get("limit").map(String::as_str), Some("20"));
        assert_eq!(
            parts.query.get("fromDateTime").map(String::as_str),
            Some("2023-01-01T00:00:00Z")
        );
    }

    #[test]
    fn duplicate_query_keys_keep_last_value() {
        let parts = IdentifierParts::parse("bill/118/hr/1?limit=20&limit=50").unwrap();
        assert_eq!(parts.query.get("limit").map(String::as_str), Some("50"));
    }

    #[test]
    fn rejects_malformed_shapes() {
        let cases = [
            ("", "empty identifier"),
            ("congress-gov://", "scheme only"),
            ("bill//hr/1", "empty segment"),
            ("bill/118/hr/1/", "trailing slash"),
            ("bill/118/hr/1?limit", "query pair without equals"),
            ("bill/118/hr/1?=20", "query pair without key"),
        ];

        for (identifier, desc) in cases {
            let result = IdentifierParts::parse(identifier);
            assert!(
                matches!(result, Err(GatewayError::InvalidIdentifier(_))),
                "case '{desc}': {result:?}"
            );
        }
    }

    #[test]
    fn collection_only_identifier_has_no_segments() {
        let parts = IdentifierParts::parse("congressional-record").unwrap();
        assert_eq!(parts.collection, "congressional-record");
        assert!(parts.segments.is_empty());
    }
}
