use crate::templates::desktop_layout;
use maud::{html, Markup};

/// A basic HTML error page. The message is escaped by maud.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to upload" } }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_escaped() {
        let page = error_page(400, "<script>x</script>").into_string();
        assert!(page.contains("Error 400"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>x"));
    }
}
