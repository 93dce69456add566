use std::sync::LazyLock;

use regex::Regex;

use super::utils::WS;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!(r"####{WS}+`([^`]+)`")).unwrap());
static TERMINATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!(r"####{WS}+`|---")).unwrap());

/// One action heading and the text that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Split the document into action sections.
///
/// A body runs from the end of its heading to the next heading marker
/// (`####`, whitespace, backtick) or `---`, or to the end of the document.
/// The terminator is not consumed, so the next heading search resumes at its
/// start.
pub fn split_sections(text: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(caps) = HEADING_RE.captures_at(text, pos) {
        let (Some(heading), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = heading.end();
        let body_end = TERMINATOR_RE
            .find_at(text, body_start)
            .map_or(text.len(), |m| m.start());

        sections.push(Section {
            name: name.as_str(),
            body: &text[body_start..body_end],
        });
        pos = body_end;
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<&str> {
        split_sections(text).iter().map(|s| s.name).collect()
    }

    #[test]
    fn no_headings() {
        assert!(split_sections("# Title\n\nplain text\n---\n").is_empty());
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn body_stops_at_next_heading() {
        let sections = split_sections("#### `a`\none\n#### `b`\ntwo\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], Section { name: "a", body: "\none\n" });
        assert_eq!(sections[1], Section { name: "b", body: "\ntwo\n" });
    }

    #[test]
    fn body_stops_at_rule() {
        let sections = split_sections("#### `a`\none\n---\n### Other\nstray text\n#### `b`\n");
        assert_eq!(sections[0].body, "\none\n");
        assert_eq!(sections[1].name, "b");
        assert_eq!(sections[1].body, "\n");
    }

    #[test]
    fn rule_inside_line_also_terminates() {
        let sections = split_sections("#### `a`\nfoo --- bar\n");
        assert_eq!(sections[0].body, "\nfoo ");
    }

    #[test]
    fn heading_whitespace_may_span_lines() {
        assert_eq!(names("####\n\t`spaced`\nbody"), vec!["spaced"]);
        assert_eq!(names("####   `wide`"), vec!["wide"]);
    }

    #[test]
    fn deeper_heading_still_matches_trailing_hashes() {
        assert_eq!(names("##### `five`\n"), vec!["five"]);
    }

    #[test]
    fn heading_separator_control_counts_as_whitespace() {
        assert_eq!(names("####\x1c`sep`\n"), vec!["sep"]);
    }

    #[test]
    fn heading_without_space_is_ignored() {
        assert!(split_sections("####`tight`\n").is_empty());
    }

    #[test]
    fn name_is_raw_capture() {
        assert_eq!(names("#### ` padded `\n"), vec![" padded "]);
    }

    #[test]
    fn empty_code_span_terminates_but_is_not_a_heading() {
        let sections = split_sections("#### `a`\none\n#### ``\n#### `b`\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, "\none\n");
        assert_eq!(sections[1].name, "b");
    }

    #[test]
    fn fixture_order() {
        let md = std::fs::read_to_string("tests/fixtures/actions.md").unwrap();
        assert_eq!(names(&md), vec!["deckNames", "createDeck", "version", "sync"]);
    }
}
