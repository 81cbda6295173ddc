use super::layout;
use crate::components::card;

pub fn home() -> String {
    let body = concat!(
        r#"<p class="muted">Inspect recent evaluation runs and drill into individual test results.</p>"#,
        r#"<a href="/runs" class="button">View Evaluation Runs</a>"#
    );

    let main = format!(
        r#"<div class="stack"><h1>Vanguard AI Eval Platform</h1><p class="lead">Run automated evaluations for prompts and models, combining heuristic checks with LLM-based judging.</p>{}</div>"#,
        card("Evaluation Runs", body)
    );

    layout("", &main)
}
