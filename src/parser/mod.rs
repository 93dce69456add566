pub mod fields;
pub mod sections;
pub mod utils;

use tracing::{debug, info, trace};

/// One documented API action, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// 1-based position in the document.
    pub ordinal: usize,
    pub name: String,
    pub description: String,
    pub sample_request: Option<String>,
    /// Extracted alongside the request but never emitted.
    pub sample_result: Option<String>,
}

impl Action {
    pub fn sample_request_or_sentinel(&self) -> &str {
        self.sample_request.as_deref().unwrap_or(fields::NO_SAMPLE_REQUEST)
    }

    pub fn sample_result_or_sentinel(&self) -> &str {
        self.sample_result.as_deref().unwrap_or(fields::NO_SAMPLE_RESULT)
    }
}

/// Two-pass pipeline: markdown → action sections → actions.
pub fn extract_actions(markdown: &str) -> Vec<Action> {
    let actions: Vec<Action> = sections::split_sections(markdown)
        .iter()
        .enumerate()
        .map(|(i, section)| build_action(i + 1, section))
        .collect();
    info!(count = actions.len(), "extracted actions");
    actions
}

fn build_action(ordinal: usize, section: &sections::Section<'_>) -> Action {
    let action = Action {
        ordinal,
        name: utils::trim_ws(section.name).to_string(),
        description: fields::description(section.body)
            .unwrap_or(fields::NO_DESCRIPTION)
            .to_string(),
        sample_request: fields::sample_request(section.body).map(str::to_string),
        sample_result: fields::sample_result(section.body).map(str::to_string),
    };
    debug!(
        ordinal,
        name = %action.name,
        has_request = action.sample_request.is_some(),
        has_result = action.sample_result.is_some(),
        "action"
    );
    trace!(
        request = action.sample_request_or_sentinel(),
        result = action.sample_result_or_sentinel(),
        "action samples"
    );
    action
}

// ── Tests ──
