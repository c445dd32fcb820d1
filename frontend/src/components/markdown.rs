use leptos::*;
use pulldown_cmark::{html, Parser};

pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new(content);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders markdown content as HTML
#[component]
pub fn MarkdownView(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);

    view! {
        <div class="markdown-content" inner_html=html_content></div>
    }
}
