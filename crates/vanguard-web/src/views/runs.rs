use super::layout;
use crate::components::{badge, card, head_row, table, td, tr};
use crate::html::{escape, link};
use url::Url;
use vanguard_core::format;
use vanguard_core::model::{RunSummary, Verdict};
use vanguard_core::report::console::NO_RUNS;

pub fn runs_page(runs: &[RunSummary]) -> String {
    let body = if runs.is_empty() {
        format!(r#"<p class="muted empty">{}</p>"#, escape(NO_RUNS))
    } else {
        let head = head_row(&[
            "Created",
            "Model",
            "Cases",
            "Passed",
            "Average score",
            "Status",
        ]);
        let rows: String = runs.iter().map(run_row).collect();
        table(&head, &rows)
    };

    let main = format!(
        r#"<div class="stack"><div class="title-row"><h1>Evaluation Runs</h1></div>{}</div>"#,
        card("Recent runs", &body)
    );
    layout("Runs", &main)
}

fn run_row(run: &RunSummary) -> String {
    let href = run_href(&run.id);
    let cells = [
        td(&link(&href, "run-link", &format::timestamp(&run.created_at))),
        td(&escape(&run.target_model)),
        td(&run.total_cases.to_string()),
        td(&format!("{} / {}", run.passed_cases, run.total_cases)),
        td(&format::score(run.average_score)),
        td(&badge(
            Verdict::from_pass(run.overall_pass),
            format::pass_label(run.overall_pass),
        )),
    ];
    tr("run-row", &cells)
}

/// Detail path for a run. The id is pushed as one path segment, encoded the
/// same way the API client encodes it.
fn run_href(id: &str) -> String {
    let Ok(mut url) = Url::parse("http://dashboard.local/runs") else {
        return "/runs".to_string();
    };
    if let Ok(mut segs) = url.path_segments_mut() {
        segs.push(id);
    }
    url.path().to_string()
}
