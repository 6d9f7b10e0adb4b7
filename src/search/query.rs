//! Query parsing: raw user input to normalized search terms.

use std::fmt;
use url::Url;

/// Separator between terms in the `q` parameter.
pub const TERM_SEPARATOR: char = '+';

/// Name of the page URL parameter carrying the query.
pub const QUERY_PARAM: &str = "q";

/// A parsed search query.
///
/// Built fresh for every search and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    terms: Vec<String>,
    text: String,
}

impl Query {
    /// Parse raw input: lower-case it, split on `+` and drop empty segments.
    ///
    /// Examples:
    /// - `Widget+Show` → terms=["widget", "show"]
    /// - `foo++bar` → terms=["foo", "bar"]
    /// - `""` or `"+"` → no terms
    pub fn parse(raw: &str) -> Self {
        let terms: Vec<String> = raw
            .to_lowercase()
            .split(TERM_SEPARATOR)
            .filter(|chunk| !chunk.is_empty())
            .map(str::to_string)
            .collect();
        let text = terms.join(" ");

        Self {
            raw: raw.to_string(),
            terms,
            text,
        }
    }

    /// Extract the query from a page URL's `q` parameter.
    ///
    /// Returns `None` when there is no `q` parameter or it carries no `=`.
    /// `?q=` yields a query with no terms, which callers treat as "no search".
    pub fn from_url(url: &Url) -> Option<Self> {
        Self::from_query_string(url.query()?)
    }

    /// Extract the query from a raw query string (`a=1&q=foo+bar`).
    ///
    /// Values are percent-decoded only; a literal `+` is kept so it still
    /// separates terms. When `q` appears more than once the last value wins.
    pub fn from_query_string(query_string: &str) -> Option<Self> {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

        let mut value = None;
        for pair in query_string.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            if decode_component(key).as_deref() != Some(QUERY_PARAM) {
                continue;
            }
            value = parts.next().and_then(decode_component);
        }

        value.map(|raw| Self::parse(&raw))
    }

    /// The input exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized terms, in input order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms joined with single spaces, for display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A query without terms means no search is performed.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn decode_component(component: &str) -> Option<String> {
    match urlencoding::decode(component) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            tracing::debug!("Ignoring undecodable query component '{}': {}", component, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case("foo", &["foo"])]
    #[case("foo++bar", &["foo", "bar"])]
    #[case("+foo+", &["foo"])]
    #[case("GtkWidget+Show", &["gtkwidget", "show"])]
    #[case("with space", &["with space"])]
    fn test_parse_terms(#[case] raw: &str, #[case] expected: &[&str]) {
        let query = Query::parse(raw);
        check!(query.terms() == expected);
        check!(query.raw() == raw);
    }

    #[rstest]
    #[case("")]
    #[case("+")]
    #[case("+++")]
    fn test_degenerate_input_has_no_terms(#[case] raw: &str) {
        let query = Query::parse(raw);
        check!(query.is_empty());
        check!(query.text() == "");
    }

    #[test]
    fn test_text_joins_terms_with_spaces() {
        check!(Query::parse("Widget++show+").text() == "widget show");
    }

    #[test]
    fn test_from_url_keeps_plus_as_separator() {
        let url = Url::parse("https://docs.gtk.org/gtk4/?q=widget+show").unwrap();
        let_assert!(Some(query) = Query::from_url(&url));
        check!(query.terms() == ["widget", "show"]);
    }

    #[test]
    fn test_from_url_percent_decodes() {
        let url = Url::parse("https://docs.gtk.org/gtk4/?x=1&q=Gtk%2BWidget%3Ashow").unwrap();
        let_assert!(Some(query) = Query::from_url(&url));
        check!(query.terms() == ["gtk", "widget:show"]);
    }

    #[rstest]
    #[case("https://docs.gtk.org/gtk4/")]
    #[case("https://docs.gtk.org/gtk4/?query=widget")]
    #[case("https://docs.gtk.org/gtk4/?q")]
    fn test_from_url_without_value(#[case] url: &str) {
        let url = Url::parse(url).unwrap();
        check!(Query::from_url(&url) == None);
    }

    #[test]
    fn test_from_url_empty_value_has_no_terms() {
        let url = Url::parse("https://docs.gtk.org/gtk4/?q=").unwrap();
        let_assert!(Some(query) = Query::from_url(&url));
        check!(query.is_empty());
    }

    #[test]
    fn test_last_parameter_wins() {
        let_assert!(Some(query) = Query::from_query_string("?q=first&q=second"));
        check!(query.terms() == ["second"]);
    }
}
