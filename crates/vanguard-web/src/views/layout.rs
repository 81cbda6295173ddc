use crate::html::escape;

pub const APP_TITLE: &str = "Vanguard AI Eval Dashboard";
const APP_DESCRIPTION: &str = "Inspect AI evaluation runs and results.";

/// Static shell around every page: head, brand header and navigation.
pub fn layout(title: &str, main: &str) -> String {
    let full_title = if title.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} · {}", title, APP_TITLE)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
<link rel="stylesheet" href="/assets/dashboard.css">
</head>
<body class="container-page">
<header class="site-header">
<div class="page-inner header-row">
<a href="/" class="brand">Vanguard Eval</a>
<nav class="nav"><a href="/runs">Runs</a></nav>
</div>
</header>
<main class="page-inner">
{main}
</main>
</body>
</html>
"#,
        description = escape(APP_DESCRIPTION),
        title = escape(&full_title),
        main = main
    )
}
