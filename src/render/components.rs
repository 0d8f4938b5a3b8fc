//! Shared HTML components used across all journal pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// htmx powers the fragment swaps (form posts targeting a div).
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Inline CSS for all journal pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#2563eb;--border:rgba(37,99,235,.2);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
h1{font-size:1.6rem;margin-bottom:1rem;letter-spacing:-.02em}
h2{font-size:1.25rem;margin:1rem 0 .75rem}
h3{font-size:1.1rem;margin-bottom:.5rem}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
form div{margin-bottom:.65rem}
input,textarea{width:100%;padding:.5rem .6rem;border:1px solid var(--border);border-radius:6px;font:inherit;background:#fff;margin-top:.2rem}
textarea{min-height:70px;resize:vertical}
button{padding:.5rem 1.1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;font:inherit;font-weight:600;cursor:pointer}
button:hover{filter:brightness(1.1)}
.entry-card{border:1px solid var(--border);border-radius:10px;padding:1.25rem;margin-bottom:1rem;background:#fff}
.entry-card p{color:var(--fg2);margin-bottom:.25rem}
.entry-field{margin-bottom:10px}
.entry-label{font-weight:bold;display:inline-block;width:150px}
.entry-link{margin-bottom:.5rem}
.nav-link{display:inline-block;margin-bottom:1rem}
"#;

/// Inline CSS for error pages only.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,sans-serif;background:#fafafa;color:#111;display:flex;align-items:center;justify-content:center;min-height:100vh}
.error-page{text-align:center;padding:2rem}
.error-page h1{font-size:1.5rem;margin-bottom:.5rem}
.error-page p{color:#555;margin-bottom:1rem}
.error-page a{color:#2563eb;text-decoration:none}
"#;

/// Wrap a body fragment into a complete HTML page.
pub fn page_shell(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(HTMX_SRC) {}
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    h1 { (title) }
                    (body)
                }
            }
        }
    }
}

/// Link back to the start page.
pub fn home_link() -> Markup {
    html! {
        a class="nav-link" href="/" { "Home" }
    }
}
