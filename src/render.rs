//! Final output rendering for search results.
//!
//! The HTML form matches the markup the documentation pages expect inside their
//! `#search` container; the text form is used by the CLI and the MCP server.

use crate::search::{Query, SearchOutput};
use std::fmt::{self, Write as _};

/// Message shown when a query matched nothing.
pub const NO_RESULTS: &str = "No results found.";

/// Window title while results are shown.
pub fn page_title(query: &Query) -> String {
    format!("Results for: {}", query.text())
}

/// Render results as the HTML fragment placed in the page's search container.
pub fn render_html(output: &SearchOutput) -> String {
    let mut html = String::new();
    // Writing to a String cannot fail
    let _ = write_html(&mut html, output);
    html
}

fn write_html(html: &mut String, output: &SearchOutput) -> fmt::Result {
    write!(
        html,
        "<h1>Results for &quot;{}&quot; ({})</h1><div id=\"search-results\">",
        escape_html(&output.query_text),
        output.all_count
    )?;

    if output.results.is_empty() {
        html.push_str(NO_RESULTS);
    } else {
        html.push_str("<table class=\"results\"><tr><th>Type</th><th>Name</th></tr>");
        for result in &output.results {
            write!(
                html,
                "<tr><td class=\"result {kind}\">[{kind}]</td><td><a href=\"{}\"><code>{}</code></a></td></tr>",
                escape_html(&result.href),
                escape_html(&result.text),
                kind = result.kind,
            )?;
        }
        html.push_str("</table>");
    }

    html.push_str("</div>");
    Ok(())
}

/// Render results as a numbered plain-text listing.
pub fn render_text(output: &SearchOutput) -> String {
    let mut text = format!(
        "Results for \"{}\" ({}):\n\n",
        output.query_text, output.all_count
    );

    if output.results.is_empty() {
        text.push_str(NO_RESULTS);
        text.push('\n');
        return text;
    }

    for (idx, result) in output.results.iter().enumerate() {
        let _ = writeln!(
            text,
            "{}. [{}] {} -> {}",
            idx + 1,
            result.kind,
            result.text,
            result.href
        );
    }

    text
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
