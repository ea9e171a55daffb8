//! HTML page for a generated address.
//!
//! Pure templating: every value is escaped before it is placed in the markup.

use crate::models::{Persona, PhoneNumber, ResolvedAddress};
use crate::regions::{Region, REGIONS};
use chrono::Datelike;

const PAGE_TITLE: &str = "Real US &amp; Canadian Address Generator";

const STYLE: &str = r#"
    body {
      font-family: Arial, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      flex-direction: column;
      min-height: 100vh;
      background-color: #f0f0f0;
      margin: 0;
    }
    .container {
      text-align: center;
      background: white;
      padding: 20px;
      box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
      width: 90%;
      max-width: 600px;
      margin: 20px;
      box-sizing: border-box;
      position: relative;
    }
    .name, .gender, .phone, .address {
      font-size: 1.5em;
      margin-bottom: 10px;
      cursor: pointer;
    }
    .refresh-btn {
      padding: 10px 20px;
      background-color: #007bff;
      color: white;
      border: none;
      border-radius: 5px;
      cursor: pointer;
      margin-bottom: 20px;
    }
    .refresh-btn:hover {
      background-color: #0056b3;
    }
    .state-select {
      margin-bottom: 20px;
    }
    .map {
      width: 100%;
      height: 400px;
      border: 0;
    }
    .title {
      font-size: 2em;
      margin: 20px 0;
    }
    .footer {
      margin-top: auto;
      padding: 10px 0;
      background-color: #f0f0f0;
      width: 100%;
      text-align: center;
      font-size: 0.9em;
    }
    .copied {
      position: absolute;
      top: 10px;
      right: 10px;
      background: #28a745;
      color: white;
      padding: 5px 10px;
      border-radius: 5px;
      display: none;
    }
"#;

const SCRIPT: &str = r#"
    function copyToClipboard(text) {
      navigator.clipboard.writeText(text).then(() => {
        const copied = document.getElementById('copied')
        copied.style.display = 'block'
        setTimeout(() => {
          copied.style.display = 'none'
        }, 2000)
      })
    }
    function changeState(state) {
      window.location.href = `?state=${encodeURIComponent(state)}`
    }
"#;

/// Percent-encodes a query value with spaces as `%20`, the way browsers'
/// `encodeURIComponent` does. A literal `+` is already escaped as `%2B` by
/// the form serializer, so every remaining `+` stands for a space.
fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Renders the full page for one generated identity.
///
/// # Arguments
///
/// * `persona` - Name and gender.
/// * `phone` - Synthesized phone number.
/// * `address` - The accepted address.
/// * `selected` - Region marked as selected in the region dropdown.
/// * `map_base_url` - Base URL of the embeddable map (`?q=...&output=embed` is appended).
pub fn render(
    persona: &Persona,
    phone: &PhoneNumber,
    address: &ResolvedAddress,
    selected: &Region,
    map_base_url: &str,
) -> String {
    let map_src = format!(
        "{}?q={}&output=embed",
        map_base_url,
        encode_query_value(&address.formatted)
    );
    let year = chrono::Utc::now().year();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>{style}</style>
</head>
<body>
  <div class="title">{title}</div>
  <div class="container">
    <div class="copied" id="copied">Copied!</div>
    {name}
    {gender}
    {phone}
    {address}
    <button class="refresh-btn" onclick="window.location.reload();">Get Another Address</button>
    <div class="state-select">
      <label for="state">Select State/Province:</label>
      <select id="state" onchange="changeState(this.value)">
        {options}
      </select>
    </div>
    <iframe class="map" src="{map_src}"></iframe>
  </div>
  <div class="footer">&copy; {year} Address Generator</div>
  <script>{script}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        name = copyable_field("name", &persona.name, &persona.name),
        gender = copyable_field("gender", &persona.gender, &persona.gender),
        phone = copyable_field("phone", &phone.to_string(), &phone.digits()),
        address = copyable_field("address", &address.formatted, &address.formatted),
        options = region_options(selected),
        map_src = escape_html(&map_src),
        year = year,
        script = SCRIPT,
    )
}

/// A click-to-copy field. `copy` may differ from the displayed text (the phone
/// copies digits only).
fn copyable_field(class: &str, text: &str, copy: &str) -> String {
    format!(
        r#"<div class="{}" data-copy="{}" onclick="copyToClipboard(this.dataset.copy)">{}</div>"#,
        class,
        escape_html(copy),
        escape_html(text)
    )
}

/// `<option>` list for every supported region, with `selected` marked.
pub fn region_options(selected: &Region) -> String {
    REGIONS
        .iter()
        .map(|region| {
            format!(
                r#"<option value="{code}"{selected}>{name} ({code}) - {country}</option>"#,
                code = region.code,
                selected = if region.code == selected.code {
                    " selected"
                } else {
                    ""
                },
                name = escape_html(region.name),
                country = region.country.short_label(),
            )
        })
        .collect()
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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
