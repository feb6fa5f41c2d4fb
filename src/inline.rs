use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::Span;

// Bold is listed before italic so a `**` delimiter is never consumed as
// two single-star markers.
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*.*?\*\*|\*.*?\*|`.*?`").unwrap());

/// Split a single line into styled runs.
///
/// Text between delimited matches becomes plain runs; empty gaps are
/// dropped, but a delimited match is always emitted even when its inner
/// content is empty. An unterminated delimiter never matches and passes
/// through as plain text, so tokenizing cannot fail.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in STYLE.find_iter(line) {
        if m.start() > last {
            spans.push(Span::Text(line[last..m.start()].to_string()));
        }
        spans.push(styled(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }

    spans
}

/// Classify a delimited match and strip its markers.
fn styled(part: &str) -> Span {
    if part.starts_with("**") && part.ends_with("**") {
        // A lone `**` matches the single-star pattern but its markers
        // overlap, leaving empty bold content.
        let inner = if part.len() >= 4 {
            &part[2..part.len() - 2]
        } else {
            ""
        };
        Span::Bold(inner.to_string())
    } else if part.starts_with('*') {
        Span::Italic(part[1..part.len() - 1].to_string())
    } else {
        Span::Code(part[1..part.len() - 1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line() {
        assert_eq!(tokenize("plain text"), vec![Span::Text("plain text".into())]);
    }

    #[test]
    fn empty_line() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn bold_run() {
        assert_eq!(
            tokenize("a **bold** b"),
            vec![
                Span::Text("a ".into()),
                Span::Bold("bold".into()),
                Span::Text(" b".into()),
            ]
        );
    }

    #[test]
    fn italic_and_code_runs() {
        assert_eq!(
            tokenize("a *it* `c`"),
            vec![
                Span::Text("a ".into()),
                Span::Italic("it".into()),
                Span::Text(" ".into()),
                Span::Code("c".into()),
            ]
        );
    }

    #[test]
    fn adjacent_runs_keep_document_order() {
        assert_eq!(
            tokenize("**a**`b`*c*"),
            vec![
                Span::Bold("a".into()),
                Span::Code("b".into()),
                Span::Italic("c".into()),
            ]
        );
    }

    #[test]
    fn bold_is_not_read_as_italic() {
        assert_eq!(tokenize("**x**"), vec![Span::Bold("x".into())]);
    }

    #[test]
    fn markers_inside_code_stay_literal() {
        assert_eq!(tokenize("`a **b** c`"), vec![Span::Code("a **b** c".into())]);
    }

    #[test]
    fn code_inside_bold_stays_literal() {
        assert_eq!(tokenize("**a `b` c**"), vec![Span::Bold("a `b` c".into())]);
    }

    #[test]
    fn unterminated_markers_are_plain() {
        assert_eq!(tokenize("a*b"), vec![Span::Text("a*b".into())]);
        assert_eq!(tokenize("trailing `"), vec![Span::Text("trailing `".into())]);
    }

    #[test]
    fn empty_delimiter_pair_is_emitted() {
        assert_eq!(tokenize("**  **"), vec![Span::Bold("  ".into())]);
        assert_eq!(
            tokenize("a``b"),
            vec![
                Span::Text("a".into()),
                Span::Code("".into()),
                Span::Text("b".into()),
            ]
        );
    }

    #[test]
    fn double_star_reads_as_empty_bold() {
        assert_eq!(
            tokenize("a**b"),
            vec![
                Span::Text("a".into()),
                Span::Bold("".into()),
                Span::Text("b".into()),
            ]
        );
    }

    #[test]
    fn contents_reconstruct_the_line() {
        let line = "intro **bold** mid *it* `code` outro";
        let text: String = tokenize(line).iter().map(|s| s.content()).collect();
        assert_eq!(text, "intro bold mid it code outro");
    }
}
