//! Query-string encoding for endpoint parameters.
//!
//! Each parameter struct lists its fields explicitly through [`ToQuery`].
//! The rules for a single field:
//!
//! - a value equal to its zero value (empty string, `0`, empty list) is
//!   omitted, unless the field declares a default, in which case the default
//!   is sent instead;
//! - list fields repeat the key once per element, preserving order
//!   (`id=1&id=2`). Elements are sent as-is, empty ones included; only an
//!   empty list is omitted.

use url::form_urlencoded;

/// Writes a parameter object into a [`QueryBuilder`].
pub trait ToQuery {
    fn write_query(&self, query: &mut QueryBuilder);

    /// Encode into a bare query string (without the leading `?`).
    fn to_query_string(&self) -> String {
        let mut query = QueryBuilder::new();
        self.write_query(&mut query);
        query.finish()
    }
}

/// Endpoints that take no parameters.
impl ToQuery for () {
    fn write_query(&self, _query: &mut QueryBuilder) {}
}

/// Accumulates ordered key/value pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// String field without a default. Omitted when empty.
    pub fn str(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Optional field. `None` and empty strings are omitted.
    pub fn opt<V: AsRef<str>>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.str(key, v.as_ref());
        }
        self
    }

    /// List field. Each element becomes its own `key=value` pair.
    pub fn list<V: AsRef<str>>(&mut self, key: &'static str, values: &[V]) -> &mut Self {
        for v in values {
            self.pairs.push((key, v.as_ref().to_string()));
        }
        self
    }

    /// Integer field with a declared default. Zero sends the default.
    pub fn int_or(&mut self, key: &'static str, value: u32, default: u32) -> &mut Self {
        let value = if value == 0 { default } else { value };
        self.pairs.push((key, value.to_string()));
        self
    }

    /// URL-encode the pairs in insertion order.
    pub fn finish(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        ids: Vec<String>,
        after: String,
        first: u32,
    }

    impl ToQuery for Sample {
        fn write_query(&self, query: &mut QueryBuilder) {
            query
                .list("id", &self.ids)
                .str("after", &self.after)
                .int_or("first", self.first, 20);
        }
    }

    #[test]
    fn zero_values_are_omitted_and_defaults_applied() {
        let sample = Sample {
            ids: vec![],
            after: String::new(),
            first: 0,
        };
        assert_eq!(sample.to_query_string(), "first=20");
    }

    #[test]
    fn explicit_value_overrides_default() {
        let sample = Sample {
            ids: vec![],
            after: "cursor".into(),
            first: 100,
        };
        assert_eq!(sample.to_query_string(), "after=cursor&first=100");
    }

    #[test]
    fn list_values_round_trip_in_order() {
        let ids = vec!["44322889".to_string(), "12826".to_string(), "a b&c".to_string()];
        let sample = Sample {
            ids: ids.clone(),
            after: String::new(),
            first: 5,
        };

        let encoded = sample.to_query_string();
        let decoded: Vec<String> = form_urlencoded::parse(encoded.as_bytes())
            .filter(|(k, _)| k == "id")
            .map(|(_, v)| v.into_owned())
            .collect();

        assert_eq!(decoded, ids);
    }

    #[test]
    fn empty_list_elements_keep_their_position() {
        let ids = vec!["1".to_string(), String::new(), "2".to_string()];
        let sample = Sample {
            ids: ids.clone(),
            after: String::new(),
            first: 0,
        };

        let encoded = sample.to_query_string();
        assert_eq!(encoded, "id=1&id=&id=2&first=20");

        let decoded: Vec<String> = form_urlencoded::parse(encoded.as_bytes())
            .filter(|(k, _)| k == "id")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(decoded, ids);
    }

    #[test]
    fn unit_params_encode_to_nothing() {
        assert_eq!(().to_query_string(), "");
    }

    #[test]
    fn opt_skips_none_and_empty() {
        let mut query = QueryBuilder::new();
        query
            .opt("reason", None::<&str>)
            .opt("source_context", Some(""))
            .opt("login", Some("dallas"));
        assert_eq!(query.finish(), "login=dallas");
    }
}
