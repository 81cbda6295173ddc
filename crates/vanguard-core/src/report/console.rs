use crate::format;
use crate::model::{RunDetail, RunSummary};
use std::fmt::Write;

pub const NO_RUNS: &str = "No runs yet. Trigger an evaluation via the API.";
pub const NO_RESULTS: &str = "No results recorded for this run.";

fn icon(passed: bool) -> &'static str {
    if passed {
        "✅"
    } else {
        "❌"
    }
}

pub fn render_runs(runs: &[RunSummary]) -> String {
    if runs.is_empty() {
        return format!("{}\n", NO_RUNS);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Evaluation runs ({}):", runs.len());
    for r in runs {
        let _ = writeln!(
            out,
            "{} {:<23} {:<24} {:>4} / {:<4} {}  {}  {}",
            icon(r.overall_pass),
            format::timestamp(&r.created_at),
            r.target_model,
            r.passed_cases,
            r.total_cases,
            format::score(r.average_score),
            format::pass_label(r.overall_pass),
            r.id
        );
    }
    out
}

pub fn render_run(run: &RunDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Run {}", run.id);
    let _ = writeln!(out, "  Model:          {}", run.target_model);
    let _ = writeln!(out, "  Created:        {}", format::timestamp(&run.created_at));
    let _ = writeln!(out, "  Status:         {}", run.status);
    let _ = writeln!(
        out,
        "  Cases:          {} / {} passed",
        run.passed_cases, run.total_cases
    );
    let _ = writeln!(out, "  Average score:  {}", format::score(run.average_score));
    let _ = writeln!(out, "  Pass threshold: {}", format::score(run.pass_threshold));
    let _ = writeln!(out, "  Prompt:");
    for line in run.prompt.lines() {
        let _ = writeln!(out, "    {}", line);
    }

    out.push('\n');
    if run.results.is_empty() {
        let _ = writeln!(out, "{}", NO_RESULTS);
    }
    for r in &run.results {
        let _ = writeln!(
            out,
            "{} {:<20} {}  {}",
            icon(r.passed),
            r.test_case_id,
            format::score(r.combined_score),
            format::pass_label(r.passed)
        );
        let _ = writeln!(out, "    Input:    {}", one_line(&r.input_text));
        let _ = writeln!(
            out,
            "    Expected: {}",
            one_line(format::expected_or_dash(r.expected_output.as_deref()))
        );
        let _ = writeln!(out, "    Output:   {}", one_line(&r.model_output));
        let _ = writeln!(out, "    Judge:    {}", one_line(&r.judge_reasoning));
    }

    out.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    let _ = writeln!(
        out,
        "{}: {} passed, {} failed",
        format::overall_label(run.overall_pass),
        run.passed_cases,
        run.total_cases.saturating_sub(run.passed_cases)
    );
    out
}

fn one_line(s: &str) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 100 {
        let head: String = flat.chars().take(100).collect();
        format!("{}...", head)
    } else {
        flat
    }
}
