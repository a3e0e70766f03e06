//! Markup helpers shared by the extractors.
//!
//! vlr.gg pages pad most text with newlines and tabs, and encode flags and
//! states as `mod-*` classes. These helpers normalize both.

use scraper::{ElementRef, Html, Selector};
use vlr_core::ExtractionError;

// ============================================================================
// Selectors
// ============================================================================

/// Compiles a CSS selector.
pub fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// First descendant of `el` matching `css`.
pub fn find<'a>(el: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(el.select(&sel).next())
}

/// Last descendant of `el` matching `css`.
pub fn find_last<'a>(
    el: ElementRef<'a>,
    css: &str,
) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(el.select(&sel).last())
}

/// All descendants of `el` matching `css`, in document order.
pub fn find_all<'a>(el: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(el.select(&sel).collect())
}

/// All elements of `document` matching `css`.
pub fn select_all<'a>(document: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(document.select(&sel).collect())
}

/// First element of `document` matching `css`.
pub fn select_first<'a>(
    document: &'a Html,
    css: &str,
) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(document.select(&sel).next())
}

/// Whether `el` itself matches `css`.
pub fn matches(el: ElementRef<'_>, css: &str) -> Result<bool, ExtractionError> {
    let sel = selector(css)?;
    Ok(sel.matches(&el))
}

// ============================================================================
// Text
// ============================================================================

/// Turns newlines and tabs into spaces, collapses whitespace runs and trims.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleaned text of `el` and all its descendants.
pub fn text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// Cleaned text of an optional element; empty when absent.
pub fn text_or_empty(el: Option<ElementRef<'_>>) -> String {
    el.map(text).unwrap_or_default()
}

/// Cleaned text of the first descendant matching `css`; empty when absent.
pub fn text_at(el: ElementRef<'_>, css: &str) -> Result<String, ExtractionError> {
    Ok(text_or_empty(find(el, css)?))
}

/// Cleaned text of every descendant matching `css`, concatenated.
pub fn text_all(el: ElementRef<'_>, css: &str) -> Result<String, ExtractionError> {
    let joined: String = find_all(el, css)?
        .into_iter()
        .flat_map(|e| e.text())
        .collect();
    Ok(clean_text(&joined))
}

/// Cleaned text of the direct text children of `el`, skipping child elements.
pub fn own_text(el: ElementRef<'_>) -> String {
    let joined: String = el
        .children()
        .filter_map(|child| child.value().as_text().map(|t| t.to_string()))
        .collect();
    clean_text(&joined)
}

/// First non-blank direct text child of `el`.
pub fn first_text_node(el: ElementRef<'_>) -> Option<String> {
    el.children()
        .filter_map(|child| child.value().as_text().map(|t| clean_text(t)))
        .find(|t| !t.is_empty())
}

/// Last non-blank direct text child of `el`.
pub fn last_text_node(el: ElementRef<'_>) -> Option<String> {
    el.children()
        .filter_map(|child| child.value().as_text().map(|t| clean_text(t)))
        .filter(|t| !t.is_empty())
        .last()
}

// ============================================================================
// Attributes and classes
// ============================================================================

/// Attribute value of `el`, owned.
pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}

/// Attribute value of the first descendant matching `css`.
pub fn attr_at(el: ElementRef<'_>, css: &str, name: &str) -> Result<Option<String>, ExtractionError> {
    Ok(find(el, css)?.and_then(|e| attr(e, name)))
}

/// Whether `el` carries `class`.
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// The suffix of the first `mod-*` class of `el` (`flag mod-us` -> `us`).
pub fn mod_class(el: ElementRef<'_>) -> Option<String> {
    el.value()
        .classes()
        .find_map(|c| c.strip_prefix("mod-"))
        .map(str::to_string)
}

// ============================================================================
// Tree navigation
// ============================================================================

/// Parent element of `el`.
pub fn parent(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Next sibling element of `el`, skipping text nodes.
pub fn next_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Previous sibling element of `el`, skipping text nodes.
pub fn prev_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Direct child elements of `el`.
pub fn child_elements(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Finds the first element matching `css` whose text contains `needle`, and
/// returns its next sibling element.
pub fn section_after<'a>(
    document: &'a Html,
    css: &str,
    needle: &str,
) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    Ok(select_all(document, css)?
        .into_iter()
        .find(|el| text(*el).contains(needle))
        .and_then(next_element))
}

// ============================================================================
// Numbers
// ============================================================================

/// Parses the leading integer of `raw` (`"12th"` -> 12), ignoring leading
/// whitespace. Returns `None` when no digits lead.
pub fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// [`leading_int`] restricted to non-negative values that fit a `u32`.
pub fn leading_u32(raw: &str) -> Option<u32> {
    leading_int(raw).and_then(|v| u32::try_from(v).ok())
}

/// Parses the leading decimal number of `raw` (`"1.25x"` -> 1.25).
pub fn leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in trimmed.char_indices() {
        match ch {
            '-' | '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    trimmed[..end].parse().ok()
}

/// Path segment `index` of an href split on `/` (`"/team/2/sen"`, 2 -> `"2"`).
pub fn path_segment(href: &str, index: usize) -> String {
    href.split('/').nth(index).unwrap_or_default().to_string()
}

// ============================================================================
// Tests
// ============================================================================
