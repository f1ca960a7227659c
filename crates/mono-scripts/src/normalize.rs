//! Whitespace- and line-ending-tolerant canonical text form
//!
//! Version-control checkout settings rewrite line endings and editors leave
//! trailing whitespace behind; neither counts as drift. Every comparison the
//! sync engine makes goes through [`normalize`] first.

/// Normalize text for equality comparison.
///
/// Splits on `\n`, strips trailing (never leading) whitespace from every
/// line, and rejoins with a single `\n`. CRLF endings leave a trailing `\r`
/// on each line, which is absorbed with the rest of the trailing
/// whitespace. Idempotent: normalizing normalized content is a no-op.
pub fn normalize(content: &str) -> String {
    content
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
