use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header h3 { margin: 0; }
header nav { margin-left: auto; }
main { padding: 1.5rem; }
.layout { display: flex; gap: 1.5rem; align-items: flex-start; }
.sidebar { min-width: 240px; padding: 1rem; background: #f9fafb; border-radius: 8px; }
.sidebar label { display: block; margin-top: 0.75rem; font-weight: 600; }
.content { flex: 1; overflow-x: auto; }
.status { padding: 0.75rem 1rem; border-radius: 6px; }
.status.success { background: #dcfce7; color: #166534; }
.status.warning { background: #fef9c3; color: #854d0e; }
table { border-collapse: collapse; width: 100%; font-size: 0.9em; }
th, td { padding: 6px 8px; border-bottom: 1px solid #e5e7eb; text-align: left; white-space: nowrap; }
th { border-bottom: 2px solid #e5e7eb; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.card { margin-top: 1.5rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Property Deal Finder" }
                    nav {
                        a href="/" { "Upload a new file" }
                    }
                }
                (content)
            }
        }
    }
}
