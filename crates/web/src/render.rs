//! HTML rendering for the inventory UI

use rackstore_core::Part;

const STYLE: &str = r#"      body { font-family: Arial, sans-serif; margin: 2rem; }
      header { margin-bottom: 1.5rem; }
      nav a { margin-right: 1rem; }
      table { border-collapse: collapse; width: 100%; }
      th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; }
      .message { background: #f7f7f7; padding: 0.75rem; border-radius: 4px; }"#;

/// Full page: head, site header with navigation, then `body` verbatim
pub fn render_layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <style>
{style}
    </style>
  </head>
  <body>
    <header>
      <h1>Light-Guided Smart Parts Rack</h1>
      <nav>
        <a href="/">Home</a>
        <a href="/inventory">Inventory</a>
      </nav>
    </header>
    {body}
  </body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        body = body,
    )
}

pub fn render_home() -> String {
    render_layout(
        "Home",
        r#"<p class="message">Use the navigation to access inventory data.</p>"#,
    )
}

/// Inventory table, optionally preceded by a message
///
/// An empty `parts` slice renders a single "No parts available." row.
pub fn render_inventory(parts: &[Part], message: Option<&str>) -> String {
    let mut rows = String::new();
    for part in parts {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&part.id),
            escape_html(&part.name),
            part.quantity
        ));
    }
    if rows.is_empty() {
        rows.push_str(r#"<tr><td colspan="3">No parts available.</td></tr>"#);
    }

    let message_block = match message {
        Some(message) if !message.is_empty() => {
            format!(r#"<p class="message">{}</p>"#, escape_html(message))
        }
        _ => String::new(),
    };

    let body = format!(
        r#"
    {message_block}
    <table>
      <thead>
        <tr>
          <th>Part ID</th>
          <th>Name</th>
          <th>Quantity</th>
        </tr>
      </thead>
      <tbody>
        {rows}
      </tbody>
    </table>
    "#
    );
    render_layout("Inventory", &body)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
