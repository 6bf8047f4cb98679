// src/render/template.rs
// Fixed document shell and the per-review block.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::fields::DerivedFields;
use crate::config::consts::{DOC_HEADING, DOC_TITLE};
use crate::record::Record;

const STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f4f4f4;
        }
        .review {
            background-color: #fff;
            margin-bottom: 20px;
            padding: 15px;
            border-radius: 5px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
            display: flex;
            align-items: flex-start;
        }
        .review img {
            max-width: 150px;
            border-radius: 5px;
            display: block;
            margin-left: auto;
            margin-right: auto;
        }
        .review h2 {
            margin: 0;
            font-size: 1.5em;
            color: #333;
        }
        .review h3 {
            margin: 0;
            font-size: 1.2em;
            color: #666;
        }
        .review .comment {
            font-size: 1.1em;
            margin-top: 15px;
            color: #000;
            white-space: pre-line;
        }
        .review .date {
            margin-top: 10px;
            font-size: 0.9em;
            color: #999;
        }
        .review .rating {
            font-size: 2em;
            margin: 0;
            text-align: center;
        }
        .review-content {
            flex: 1;
            margin-left: 20px;
        }
"#;

pub fn head() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{DOC_TITLE}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{DOC_HEADING}</h1>
"#
    )
}

pub const TAIL: &str = "</body>\n</html>\n";

/// Marker every review block opens with; one per record.
pub const BLOCK_OPEN: &str = r#"<div class="review">"#;

pub fn review_block(record: &Record, derived: &DerivedFields<'_>) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("    ");
    out.push_str(BLOCK_OPEN);
    out.push_str("\n        <div>\n");

    if let Some(poster) = record.poster_url() {
        out.push_str(&format!(
            "            <a href=\"{}\" target=\"_blank\" class=\"poster-link\"><img src=\"{}\" alt=\"{} poster\"></a>\n",
            attr(record.link()),
            attr(poster),
            attr(derived.main_title),
        ));
    }
    if let Some(stars) = &derived.star_glyphs {
        out.push_str(&format!("            <p class=\"rating\">{stars}</p>\n"));
    }

    out.push_str("        </div>\n        <div class=\"review-content\">\n");
    out.push_str(&format!(
        "            <h2>{} ({})</h2>\n",
        text(derived.main_title),
        text(derived.release_year.unwrap_or_default()),
    ));
    if let Some(alias) = derived.alias_title {
        out.push_str(&format!("            <h3>{}</h3>\n", text(alias)));
    }
    if let Some(comment) = record.comment() {
        out.push_str(&format!("            <div class=\"comment\">{}</div>\n", text(comment)));
    }
    if let Some(date) = record.date() {
        out.push_str(&format!("            <p class=\"date\">Date: {}</p>\n", text(date)));
    }
    out.push_str("        </div>\n    </div>\n");
    out
}
