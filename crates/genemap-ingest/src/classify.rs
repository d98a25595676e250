//! Line classification and lookup key extraction.
//!
//! A source line is matched against the family table in order; the first
//! family whose trigger substring appears in the line decides how the lookup
//! key is cut out of it. All families share the same display id rule: the
//! text after the line's first character up to the first `>`.
//!
//! Delimiter fallbacks:
//!
//! - a missing closing `>` or `"` extends the slice to the end of the line
//! - NIH lines without `gene` search for `/` from the start of the line
//! - NIH lines without that `/`, and XB-GENE lines without an opening `"`,
//!   produce an empty key, which resolves to "Not found" without a scan

use genemap_model::{Extraction, IdentifierFamily};

/// Classify `line` against `families` (in precedence order) and extract its
/// display id and lookup key.
///
/// Returns `None` when no trigger matches, or when the display id would be
/// empty.
pub fn classify_and_extract<I>(line: &str, families: I) -> Option<Extraction>
where
    I: IntoIterator<Item = IdentifierFamily>,
{
    let line = strip_terminator(line);
    let family = families.into_iter().find(|family| family.matches(line))?;
    extract(family, line)
}

/// Extract the display id and lookup key of `line` for a known `family`.
pub fn extract(family: IdentifierFamily, line: &str) -> Option<Extraction> {
    let line = strip_terminator(line);
    let display_id = display_id(line);
    if display_id.is_empty() {
        return None;
    }
    let lookup_key = match family {
        IdentifierFamily::Zdb | IdentifierFamily::Mgi => anchored_key(line, family.trigger()),
        IdentifierFamily::Nih => nih_key(line),
        IdentifierFamily::XbGene => xb_gene_key(line),
    };
    Some(Extraction {
        family,
        display_id: display_id.to_string(),
        lookup_key: lookup_key.to_string(),
    })
}

/// Leading tag content: skips the opening delimiter character.
fn display_id(line: &str) -> &str {
    let start = line.chars().next().map_or(0, char::len_utf8);
    slice_until(line, start, '>')
}

/// From the trigger up to the next `>`.
fn anchored_key<'a>(line: &'a str, trigger: &str) -> &'a str {
    match line.find(trigger) {
        Some(start) => slice_until(line, start, '>'),
        None => "",
    }
}

/// After the first `/` following `gene`, up to the next `>`.
fn nih_key(line: &str) -> &str {
    let gene = line.find("gene").unwrap_or(0);
    match find_from(line, '/', gene) {
        Some(slash) => slice_until(line, slash + 1, '>'),
        None => "",
    }
}

/// Between the first `"` at or after `XB-GENE` and the next `"`.
fn xb_gene_key(line: &str) -> &str {
    let Some(anchor) = line.find(IdentifierFamily::XbGene.trigger()) else {
        return "";
    };
    match find_from(line, '"', anchor) {
        Some(quote) => slice_until(line, quote + 1, '"'),
        None => "",
    }
}

fn find_from(line: &str, needle: char, from: usize) -> Option<usize> {
    line.get(from..)?.find(needle).map(|idx| idx + from)
}

/// `line[start..]` up to (excluding) `delim`, or to the end of the line.
fn slice_until(line: &str, start: usize, delim: char) -> &str {
    let end = find_from(line, delim, start).unwrap_or(line.len());
    line.get(start..end).unwrap_or("")
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
