// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTML shell served for every non-API path
//!
//! The shell only loads the prebuilt FastUI bundle; the bundle then requests
//! `/api{path}` and renders the returned nodes.

/// Version of the prebuilt FastUI front end bundle
pub const FASTUI_PREBUILT_VERSION: &str = "0.0.23";

/// HTML document that boots the prebuilt front end with `title`
pub fn prebuilt_html(title: &str) -> String {
    let title = escape_html(title);
    let cdn = format!(
        "https://cdn.jsdelivr.net/npm/@pydantic/fastui-prebuilt@{FASTUI_PREBUILT_VERSION}/dist/assets"
    );

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script type="module" crossorigin src="{cdn}/index.js"></script>
    <link rel="stylesheet" crossorigin href="{cdn}/index.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_carries_title_and_bundle() {
        let html = prebuilt_html("Pokémon Finder");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Pokémon Finder</title>"));
        assert!(html.contains(&format!(
            "@pydantic/fastui-prebuilt@{FASTUI_PREBUILT_VERSION}/dist/assets/index.js"
        )));
        assert!(html.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn title_is_escaped() {
        let html = prebuilt_html("<script>&");
        assert!(html.contains("<title>&lt;script&gt;&amp;</title>"));
    }
}
