//! HTML fragments for link lists.
//!
//! Names and links come from the backend and are escaped before they reach the DOM.

use crate::types::LinkRecord;
use std::fmt::Write as _;

/// Render one `<li><a href="{site_root}{link}">{name}</a></li>` per record, in order.
pub fn render_link_list(site_root: &str, records: &[LinkRecord]) -> String {
    let mut output = String::new();
    for record in records {
        write_link_item(&mut output, site_root, record);
    }
    output
}

fn write_link_item(output: &mut String, site_root: &str, record: &LinkRecord) {
    // Writing to a String cannot fail.
    let _ = write!(
        output,
        r#"<li><a href="{}{}">{}</a></li>"#,
        escape_html(site_root),
        escape_html(&record.link),
        escape_html(&record.name)
    );
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
