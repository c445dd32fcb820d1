use leptos::logging::{error, log};
use leptos::*;

use crate::components::accordion::Accordion;
use crate::content::page_sections;

#[component]
pub fn App() -> impl IntoView {
    let body = match page_sections() {
        Ok(sections) => {
            log!("Loaded {} sections", sections.len());
            view! { <Accordion sections=sections class="course-topics" /> }.into_view()
        }
        Err(e) => {
            error!("Failed to load page content: {}", e);
            view! {
                <div class="alert alert-error">"Page content could not be loaded."</div>
            }
            .into_view()
        }
    };

    view! {
        <main class="container">
            <h1>"Python: topics and exercises"</h1>
            {body}
        </main>
    }
}
