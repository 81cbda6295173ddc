//! Presentational primitives. Each takes props and returns an HTML fragment;
//! `children`/`body` arguments are already-rendered markup, plain text
//! arguments are escaped here.

use crate::html::{class_attr, escape};
use vanguard_core::model::Verdict;

pub fn badge_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "badge badge-success",
        Verdict::Fail => "badge badge-danger",
        Verdict::Default => "badge badge-default",
    }
}

pub fn badge(verdict: Verdict, label: &str) -> String {
    format!(
        r#"<span class="{}">{}</span>"#,
        badge_class(verdict),
        escape(label)
    )
}

pub fn card(title: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<div class="card">"#,
            r#"<div class="card-header"><h2 class="card-title">{}</h2></div>"#,
            r#"<div class="card-content">{}</div>"#,
            "</div>"
        ),
        escape(title),
        body
    )
}

pub fn table(head: &str, body: &str) -> String {
    format!(
        r#"<div class="table-wrap"><table class="table"><thead>{}</thead><tbody>{}</tbody></table></div>"#,
        head, body
    )
}

pub fn th(text: &str) -> String {
    format!("<th>{}</th>", escape(text))
}

pub fn td(children: &str) -> String {
    format!("<td>{}</td>", children)
}

pub fn tr(class: &str, cells: &[String]) -> String {
    format!("<tr{}>{}</tr>", class_attr(&[class]), cells.concat())
}

/// Header row from plain column titles.
pub fn head_row(titles: &[&str]) -> String {
    let cells: Vec<String> = titles.iter().map(|t| th(t)).collect();
    tr("", &cells)
}
