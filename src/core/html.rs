// src/core/html.rs
// Thin helpers over `scraper` element lookups, so the page specs read as
// "find this, take its text / attribute" and nothing more.

use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

use super::sanitize::{normalize_ws, tidy_lines};

/// Compile a selector once and keep it for the life of the process.
pub fn selector(cell: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("Invalid CSS selector defined in code"))
}

/// First descendant of `scope` matching `sel`.
pub fn find<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Visible text on one line: all text nodes, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Visible text keeping line breaks (user-written blocks).
pub fn block_text_of(el: ElementRef<'_>) -> String {
    tidy_lines(&el.text().collect::<String>())
}
