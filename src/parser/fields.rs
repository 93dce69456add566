use std::sync::LazyLock;

use regex::Regex;

use super::utils::{trim_ws, WS};

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_SAMPLE_REQUEST: &str = "No sample request available";
pub const NO_SAMPLE_RESULT: &str = "No sample response available";

// Not anchored to line starts: the first `*` anywhere in the body wins.
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!(r"\*{WS}*(.*?){WS}*\n")).unwrap());
static SAMPLE_REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| details_re("Sample request:"));
static SAMPLE_RESULT_RE: LazyLock<Regex> = LazyLock::new(|| details_re("Sample result:"));

/// `<details>` block with a `<summary><i>{label}...</i></summary>` toggle wrapping a json fence.
fn details_re(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)<details>{WS}*<summary><i>{label}.*?</i></summary>{WS}*```json{WS}*(.*?){WS}*```{WS}*</details>",
        label = regex::escape(label)
    ))
    .unwrap()
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| trim_ws(m.as_str()))
}

pub fn description(body: &str) -> Option<&str> {
    first_capture(&DESCRIPTION_RE, body)
}

pub fn sample_request(body: &str) -> Option<&str> {
    first_capture(&SAMPLE_REQUEST_RE, body)
}

pub fn sample_result(body: &str) -> Option<&str> {
    first_capture(&SAMPLE_RESULT_RE, body)
}
