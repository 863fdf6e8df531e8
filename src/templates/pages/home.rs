// templates/pages/home.rs

use crate::domain::property::{ADDRESS_COLUMN, AREA_COLUMN, PRICE_COLUMN};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

// Sends the chosen file as the raw request body and follows the redirect.
const UPLOAD_SCRIPT: &str = r#"
document.getElementById('upload-form').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const file = document.getElementById('csv-file').files[0];
  if (!file) return;
  const status = document.getElementById('upload-status');
  status.textContent = 'Analysing ' + file.name + '…';
  const resp = await fetch('/upload', {
    method: 'POST',
    headers: { 'Content-Type': 'text/csv' },
    body: file,
  });
  if (resp.redirected) {
    window.location = resp.url;
    return;
  }
  document.open();
  document.write(await resp.text());
  document.close();
});
"#;

pub fn home_page() -> Markup {
    desktop_layout(
        "Property Deal Finder",
        html! {
            main {
                h1 { "🏘️ Property Deal Finder with BRRR Analysis" }

                section class="card" {
                    h3 { "📂 Upload Property CSV" }
                    p {
                        "The file needs the columns "
                        code { (ADDRESS_COLUMN) } ", "
                        code { (PRICE_COLUMN) } " and "
                        code { (AREA_COLUMN) } ". Other columns are kept as they are."
                    }
                    form id="upload-form" {
                        input type="file" id="csv-file" name="file" accept=".csv,text/csv" required;
                        " "
                        button type="submit" { "Find deals" }
                    }
                    p id="upload-status" {}
                }

                p style="color: #6b7280; font-size: 0.9em;" {
                    "Rental yields are simulated, not estimated. Treat the numbers as a first filter, not advice."
                }
            }
            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}
