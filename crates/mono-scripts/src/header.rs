//! Expected-content rendering for generated scripts
//!
//! Every generated file carries the same frame: a two-line attribution
//! banner, the descriptor's own header lines, a three-line footer whose
//! middle line points at the documentation, then the canonical body.

use crate::descriptor::ScriptDescriptor;
use crate::normalize::normalize;

/// Attribution banner placed at the top of every generated script.
pub const BANNER_LINES: [&str; 2] = [
    "// THIS FILE WAS GENERATED BY A TOOL. ANY MANUAL MODIFICATIONS WILL GET",
    "// OVERWRITTEN WHENEVER MONO IS UPGRADED.",
];

/// Footer between the descriptor header lines and the canonical body.
///
/// The trailing empty element produces the blank line that separates the
/// comment block from the body.
pub const FOOTER_LINES: [&str; 3] = [
    "//",
    "// For details about these generated files, see: https://monobuild.dev/docs/common-scripts",
    "",
];

/// Render the expected content for a descriptor over a canonical body.
///
/// Banner, header lines, footer, and the body are joined with single `\n`
/// separators. The body joins as ONE element of the list even when it
/// contains internal newlines; committed files depend on this exact join,
/// so it must not be replaced with a line-by-line join. The result is
/// normalized before being compared or written.
pub fn expected_content(descriptor: &ScriptDescriptor, body: &str) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(
        BANNER_LINES.len() + descriptor.header_lines.len() + FOOTER_LINES.len() + 1,
    );
    lines.extend(BANNER_LINES);
    lines.extend(descriptor.header_lines.iter().map(String::as_str));
    lines.extend(FOOTER_LINES);
    lines.push(body);
    normalize(&lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_banner_headers_footer_then_body() {
        let descriptor = ScriptDescriptor::new("install-run.js", ["// example"]);
        let content = expected_content(&descriptor, "console.log(1);\n");

        let expected = format!(
            "{}\n{}\n// example\n{}\n{}\n\nconsole.log(1);\n",
            BANNER_LINES[0], BANNER_LINES[1], FOOTER_LINES[0], FOOTER_LINES[1],
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn multi_line_body_joins_as_a_single_element() {
        let descriptor = ScriptDescriptor::new("x.js", Vec::<String>::new());
        let content = expected_content(&descriptor, "first();\nsecond();\n");

        // Exactly one newline between the blank footer line and the body.
        assert!(content.contains("\n\nfirst();\nsecond();\n"));
        assert!(!content.contains("\n\n\nfirst();"));
    }

    #[test]
    fn output_is_already_normalized() {
        let descriptor = ScriptDescriptor::new("x.js", ["// trailing   "]);
        let content = expected_content(&descriptor, "body();  \n");
        assert_eq!(normalize(&content), content);
    }
}
