use super::layout;
use crate::components::card;
use crate::html::escape;

pub fn not_found() -> String {
    let main = format!(
        r#"<div class="stack"><h1>404</h1>{}</div>"#,
        card(
            "Not found",
            r#"<p class="muted">This page could not be found.</p><a href="/runs" class="button">Back to runs</a>"#
        )
    );
    layout("Not found", &main)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<p class="muted">Something went wrong while loading this page.</p><pre class="code">{}</pre>"#,
        escape(message)
    );
    let main = format!(
        r#"<div class="stack"><h1>Error</h1>{}</div>"#,
        card("Application error", &body)
    );
    layout("Error", &main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_is_escaped() {
        let page = error_page("HTTP 500 <backend>");
        assert!(page.contains("HTTP 500 &lt;backend&gt;"));
    }

    #[test]
    fn not_found_links_back() {
        let page = not_found();
        assert!(page.contains("This page could not be found."));
        assert!(page.contains(r#"href="/runs""#));
    }
}
