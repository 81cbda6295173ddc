use super::layout;
use crate::components::{badge, card, head_row, table, td, tr};
use crate::html::escape;
use vanguard_core::format;
use vanguard_core::model::{ResultItem, RunDetail, Verdict};
use vanguard_core::report::console::NO_RESULTS;

pub fn run_page(run: &RunDetail) -> String {
    let header = format!(
        r#"<div class="title-row"><h1>Run details</h1>{}</div>"#,
        badge(
            Verdict::from_pass(run.overall_pass),
            format::overall_label(run.overall_pass)
        )
    );

    let main = format!(
        r#"<div class="stack">{}{}{}</div>"#,
        header,
        card("Summary", &summary(run)),
        card("Test results", &results(&run.results))
    );
    layout("Run details", &main)
}

fn field(label: &str, value_html: &str, class: &str) -> String {
    format!(
        r#"<div><dt>{}</dt><dd class="{}">{}</dd></div>"#,
        escape(label),
        class,
        value_html
    )
}

fn summary(run: &RunDetail) -> String {
    let fields = [
        field("Run ID", &escape(&run.id), "mono"),
        field("Model", &escape(&run.target_model), ""),
        field("Created", &escape(&format::timestamp(&run.created_at)), ""),
        field("Status", &badge(Verdict::Default, &run.status), ""),
        field(
            "Cases",
            &format!("{} / {} passed", run.passed_cases, run.total_cases),
            "",
        ),
        field("Average score", &format::score(run.average_score), ""),
        field("Pass threshold", &format::score(run.pass_threshold), ""),
    ];

    format!(
        r#"<dl class="summary-grid">{}</dl><div class="prompt"><h2>Prompt</h2><pre class="code">{}</pre></div>"#,
        fields.concat(),
        escape(&run.prompt)
    )
}

fn results(items: &[ResultItem]) -> String {
    if items.is_empty() {
        return format!(r#"<p class="muted empty">{}</p>"#, escape(NO_RESULTS));
    }

    let head = head_row(&[
        "Input",
        "Expected",
        "Model output",
        "Score",
        "Result",
        "Judge reasoning",
    ]);
    let rows: String = items.iter().map(result_row).collect();
    table(&head, &rows)
}

fn text_cell(text: &str, class: &str) -> String {
    td(&format!(r#"<div class="{}">{}</div>"#, class, escape(text)))
}

fn result_row(r: &ResultItem) -> String {
    let cells = [
        text_cell(&r.input_text, "cell-text"),
        text_cell(
            format::expected_or_dash(r.expected_output.as_deref()),
            "cell-text expected",
        ),
        text_cell(&r.model_output, "cell-text"),
        td(&format::score(r.combined_score)),
        td(&badge(Verdict::from_pass(r.passed), format::pass_label(r.passed))),
        text_cell(&r.judge_reasoning, "cell-text clamp"),
    ];
    tr("result-row", &cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, passed: bool, expected: Option<&str>, score: f64) -> ResultItem {
        ResultItem {
            test_case_id: id.into(),
            input_text: "What is 2+2?".into(),
            expected_output: expected.map(String::from),
            model_output: "4".into(),
            heuristic_score: 1.0,
            judge_score: 0.9,
            combined_score: score,
            passed,
            judge_reasoning: "Correct <answer>.".into(),
        }
    }

    fn detail(overall: bool, results: Vec<ResultItem>) -> RunDetail {
        RunDetail {
            id: "9b2e".into(),
            created_at: "2024-05-02T09:30:00".into(),
            status: "completed".into(),
            target_model: "stub-ci-model".into(),
            prompt: "You are a helpful, concise assistant.".into(),
            total_cases: 2,
            passed_cases: 1,
            average_score: 0.8,
            overall_pass: overall,
            pass_threshold: 0.75,
            results,
        }
    }

    #[test]
    fn overall_badge_matches_verdict() {
        let page = run_page(&detail(true, vec![]));
        assert!(page.contains(r#"<span class="badge badge-success">OVERALL PASS</span>"#));
        let page = run_page(&detail(false, vec![]));
        assert!(page.contains(r#"<span class="badge badge-danger">OVERALL FAIL</span>"#));
    }

    #[test]
    fn summary_fields() {
        let page = run_page(&detail(true, vec![]));
        assert!(page.contains("1 / 2 passed"));
        assert!(page.contains("<dd class=\"\">0.80</dd>"));
        assert!(page.contains("<dd class=\"\">0.75</dd>"));
        assert!(page.contains(r#"<span class="badge badge-default">completed</span>"#));
        assert!(page.contains("You are a helpful, concise assistant."));
    }

    #[test]
    fn empty_results_message() {
        let page = run_page(&detail(true, vec![]));
        assert!(page.contains(NO_RESULTS));
        assert!(!page.contains("<table"));
    }

    #[test]
    fn result_rows_and_badges() {
        let page = run_page(&detail(
            false,
            vec![
                item("a", true, Some("4"), 0.8333),
                item("b", false, None, 0.1),
            ],
        ));
        assert_eq!(page.matches(r#"<tr class="result-row">"#).count(), 2);
        assert!(page.contains("<td>0.83</td>"));
        assert!(page.contains("<td>0.10</td>"));
        assert!(page.contains(r#"<span class="badge badge-success">PASS</span>"#));
        assert!(page.contains(r#"<span class="badge badge-danger">FAIL</span>"#));
    }

    #[test]
    fn missing_expected_renders_dash() {
        let page = run_page(&detail(false, vec![item("b", false, None, 0.1)]));
        assert!(page.contains(r#"<div class="cell-text expected">—</div>"#));
    }

    #[test]
    fn reasoning_is_escaped() {
        let page = run_page(&detail(false, vec![item("b", false, None, 0.1)]));
        assert!(page.contains("Correct &lt;answer&gt;."));
    }
}
