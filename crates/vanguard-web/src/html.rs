/// Escapes text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `class="..."` or nothing when no classes apply.
pub fn class_attr(classes: &[&str]) -> String {
    let joined = classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, escape(&joined))
    }
}

pub fn link(href: &str, class: &str, text: &str) -> String {
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape(href),
        class_attr(&[class]),
        escape(text)
    )
}
