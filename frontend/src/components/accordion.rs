use leptos::logging::warn;
use leptos::*;
use shared::{AccordionState, SectionContent};

use crate::components::markdown::MarkdownView;

/// CSS class of a section; the stylesheet only shows the body of an
/// `active` section.
pub fn section_class(active: bool) -> &'static str {
    if active {
        "section active"
    } else {
        "section"
    }
}

/// State of a freshly created group: first section open.
pub fn group_state(sections: Vec<SectionContent>) -> AccordionState {
    let mut state = AccordionState::from_content(sections);
    state.initialize();
    state
}

/// Toggles the clicked section. Clicks outside the group are dropped.
pub fn on_header_click(state: RwSignal<AccordionState>, index: usize) {
    state.update(|s| {
        if let Err(e) = s.toggle(index) {
            warn!("Ignoring click on section header: {}", e);
        }
    });
}

/// Accordion group. Opens its first section when created.
///
/// Each group owns its own state, so several accordions on one page are
/// independent of each other.
#[component]
pub fn Accordion(
    sections: Vec<SectionContent>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    let initial = group_state(sections);

    let items: Vec<(usize, String, String)> = initial
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| (index, section.title.clone(), section.body.clone()))
        .collect();

    let state = create_rw_signal(initial);

    view! {
        <div class=full_class>
            {items
                .into_iter()
                .map(|(index, title, body)| {
                    view! { <AccordionSection state=state index=index title=title body=body /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AccordionSection(
    state: RwSignal<AccordionState>,
    index: usize,
    title: String,
    body: String,
) -> impl IntoView {
    let is_active = move || state.with(|s| s.is_active(index));

    view! {
        <div class=move || section_class(is_active())>
            <div class="section-header" on:click=move |_| on_header_click(state, index)>
                {title}
            </div>
            <div class="section-body">
                <MarkdownView content=body />
            </div>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn classes(container: &web_sys::Element, selector: &str) -> Vec<String> {
        let nodes = container.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.unchecked_into::<web_sys::Element>().class_name())
            .collect()
    }

    fn click_header(container: &web_sys::Element, index: u32) {
        let headers = container.query_selector_all(".section-header").unwrap();
        headers
            .item(index)
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    #[wasm_bindgen_test]
    fn test_mounted_accordion_follows_clicks() {
        let document = leptos::document();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let content = vec![
            SectionContent { title: "A".into(), body: String::new() },
            SectionContent { title: "B".into(), body: String::new() },
        ];
        mount_to(container.clone().unchecked_into(), move || {
            view! { <Accordion sections=content /> }
        });

        assert_eq!(classes(&container, ".section"), vec!["section active", "section"]);

        click_header(&container, 1);
        assert_eq!(classes(&container, ".section"), vec!["section", "section active"]);

        click_header(&container, 1);
        assert_eq!(classes(&container, ".section"), vec!["section", "section"]);
    }
}
