//! Receipt text parsing.
//!
//! Turns a raw OCR dump into `{store, date, items}`. All extraction is
//! best-effort: a receipt with no recognizable date or store still yields
//! whatever items could be read. Match priority is fixed and ordered:
//! prices are stripped before the quantity search, the slash date shape is
//! tried before the dash shape on each line, and within a line the
//! number-with-unit quantity shape is tried before the `x<count>` shape at
//! every position.

use crate::services::FoodCheck;
use crate::types::{ParsedItem, ParsedReceipt};

/// Lines containing any of these are receipt noise, not items.
const NOISE_KEYWORDS: &[&str] = &["total", "cash", "change", "tax", "loyalty"];

/// Units recognized in quantity substrings, in match-priority order.
/// "lb" sits before "l" so "2lb" is not split as "2l" + "b".
const QUANTITY_UNITS: &[&str] = &["oz", "lb", "g", "kg", "ml", "l"];

/// Parse one receipt's OCR text. Pure and synchronous; the food-existence
/// filter is applied separately.
pub fn parse_receipt_text(raw: &str) -> ParsedReceipt {
    let lines: Vec<&str> = raw.lines().collect();

    let store = lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string());

    let date = lines.iter().find_map(|line| find_date(line));

    let mut items = Vec::new();
    for line in &lines {
        let line = line.trim();
        if line.is_empty() || is_noise(line) {
            continue;
        }

        let no_price = strip_prices(line);
        let (name, quantity) = match find_quantity(&no_price) {
            Some((start, end)) => {
                let span = &no_price[start..end];
                (no_price.replace(span, ""), span.trim().to_string())
            }
            None => (no_price.clone(), "1".to_string()),
        };

        let name = name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        items.push(ParsedItem { name, quantity });
    }

    ParsedReceipt { store, date, items }
}

/// Keep only items the existence service recognizes as food. Service
/// errors keep the item: an unavailable checker must not drop groceries.
pub async fn filter_food_items(
    items: Vec<ParsedItem>,
    checker: &dyn FoodCheck,
) -> Vec<ParsedItem> {
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        match checker.is_food(&item.name).await {
            Ok(true) => kept.push(item),
            Ok(false) => tracing::debug!(name = %item.name, "dropped non-food item"),
            Err(error) => {
                tracing::warn!(name = %item.name, %error, "food check unavailable, keeping item");
                kept.push(item);
            }
        }
    }
    kept
}

/// Parse and filter in one call.
pub async fn parse_receipt(raw: &str, checker: &dyn FoodCheck) -> ParsedReceipt {
    let mut receipt = parse_receipt_text(raw);
    receipt.items = filter_food_items(receipt.items, checker).await;
    receipt
}

fn is_noise(line: &str) -> bool {
    let lowered = line.to_lowercase();
    NOISE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

fn has_digits(bytes: &[u8], start: usize, count: usize) -> bool {
    start + count <= bytes.len() && bytes[start..start + count].iter().all(u8::is_ascii_digit)
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Match a currency amount at `start`: optional `$`, digits, a dot, and
/// exactly two decimal digits. Returns the end of the match.
fn match_price(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if bytes.get(i) == Some(&b'$') {
        i += 1;
    }
    let after_digits = digits_end(bytes, i);
    if after_digits == i {
        return None;
    }
    i = after_digits;
    if bytes.get(i) != Some(&b'.') {
        return None;
    }
    i += 1;
    if !has_digits(bytes, i, 2) {
        return None;
    }
    Some(i + 2)
}

/// Remove every currency-amount substring from the line.
fn strip_prices(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut skip_until = 0;
    for (i, ch) in line.char_indices() {
        if i < skip_until {
            continue;
        }
        if ch.is_ascii() {
            if let Some(end) = match_price(bytes, i) {
                skip_until = end;
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Match digits optionally followed by whitespace and a known unit.
/// Without a unit the span ends after the trailing whitespace, mirroring
/// a greedy `\d+\s*(unit)?` scan.
fn match_number_quantity(line: &str, start: usize) -> Option<usize> {
    let bytes = line.as_bytes();
    let after_digits = digits_end(bytes, start);
    if after_digits == start {
        return None;
    }

    let mut k = after_digits;
    while k < bytes.len() && bytes[k].is_ascii_whitespace() {
        k += 1;
    }
    for unit in QUANTITY_UNITS {
        if let Some(slice) = line.get(k..k + unit.len()) {
            if slice.eq_ignore_ascii_case(unit) {
                return Some(k + unit.len());
            }
        }
    }
    Some(k)
}

/// Match an `x<count>` quantity ("x2", "X12").
fn match_x_quantity(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes[start] != b'x' && bytes[start] != b'X' {
        return None;
    }
    let after_digits = digits_end(bytes, start + 1);
    if after_digits == start + 1 {
        return None;
    }
    Some(after_digits)
}

/// Find the leftmost quantity substring, trying the number shape before
/// the `x<count>` shape at each position.
fn find_quantity(line: &str) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    for (i, ch) in line.char_indices() {
        if !ch.is_ascii() {
            continue;
        }
        if let Some(end) = match_number_quantity(line, i) {
            return Some((i, end));
        }
        if let Some(end) = match_x_quantity(bytes, i) {
            return Some((i, end));
        }
    }
    None
}

/// Match `M/D/YYYY` through `MM/DD/YYYY` at `start`.
fn match_slash_date(bytes: &[u8], start: usize) -> Option<usize> {
    for first_len in [2, 1] {
        if !has_digits(bytes, start, first_len) {
            continue;
        }
        let mut i = start + first_len;
        if bytes.get(i) != Some(&b'/') {
            continue;
        }
        i += 1;
        for second_len in [2, 1] {
            if !has_digits(bytes, i, second_len) {
                continue;
            }
            let mut j = i + second_len;
            if bytes.get(j) != Some(&b'/') {
                continue;
            }
            j += 1;
            if has_digits(bytes, j, 4) {
                return Some(j + 4);
            }
        }
    }
    None
}

/// Match `YYYY-M-D` through `YYYY-MM-DD` at `start`.
fn match_dash_date(bytes: &[u8], start: usize) -> Option<usize> {
    if !has_digits(bytes, start, 4) {
        return None;
    }
    let mut i = start + 4;
    if bytes.get(i) != Some(&b'-') {
        return None;
    }
    i += 1;
    for month_len in [2, 1] {
        if !has_digits(bytes, i, month_len) {
            continue;
        }
        let mut j = i + month_len;
        if bytes.get(j) != Some(&b'-') {
            continue;
        }
        j += 1;
        for day_len in [2, 1] {
            if has_digits(bytes, j, day_len) {
                return Some(j + day_len);
            }
        }
    }
    None
}

/// Find a date substring in the line: the slash shape is searched across
/// the whole line before the dash shape is tried.
fn find_date(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let matchers: [fn(&[u8], usize) -> Option<usize>; 2] = [match_slash_date, match_dash_date];
    for matcher in matchers {
        for (i, ch) in line.char_indices() {
            if !ch.is_ascii_digit() {
                continue;
            }
            if let Some(end) = matcher(bytes, i) {
                return Some(line[i..end].to_string());
            }
        }
    }
    None
}
