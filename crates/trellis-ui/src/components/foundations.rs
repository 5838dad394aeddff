use gloo::console;
use wasm_bindgen::JsCast;
use trellis_core::error::ContextError;
use trellis_core::style::StyleTokens;
use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Minimal common props shared by stateless container wrappers.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Converts framework-independent style tokens into a Yew class list.
#[must_use]
pub fn classes_from(tokens: StyleTokens) -> Classes {
    let mut classes = Classes::new();
    for token in tokens.into_vec() {
        classes.push(token.into_owned());
    }
    classes
}

/// Style tokens followed by any consumer-provided classes.
#[must_use]
pub fn tokens_with(tokens: StyleTokens, extra: &Classes) -> Classes {
    let mut classes = classes_from(tokens);
    classes.push(extra.clone());
    classes
}

/// Utility to merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    if extra.is_empty() {
        Classes::from(base)
    } else {
        let mut classes = Classes::from(base);
        classes.push(extra.clone());
        classes
    }
}

/// Renders a tag with the given classes, optional id, and children.
#[must_use]
pub fn render_container(
    tag: &'static str,
    classes: Classes,
    id: Option<&AttrValue>,
    children: &Children,
) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = id {
        node.add_attribute("id", id.to_string());
    }
    node.add_attribute("class", classes.to_string());
    for child in children.iter() {
        node.add_child(child);
    }
    node.into()
}

/// Logs a composition error and renders nothing in place of the component.
#[must_use]
pub fn report_misuse(err: &ContextError) -> Html {
    console::error!(err.to_string());
    Html::default()
}

/// Optional text wrapped in a tag with the given class.
#[must_use]
pub fn optional_text(text: Option<&AttrValue>, class: &'static str) -> Html {
    text.map(|text| html! { <p class={class}>{text.clone()}</p> })
        .unwrap_or_default()
}

/// Writes `checked` back into every radio under `container`.
///
/// Radios sharing a name uncheck each other natively, so restoring only the
/// clicked input would leave the previously selected one cleared.
pub fn restore_radios(container: &NodeRef, checked: impl Fn(&str) -> bool) {
    let Some(container) = container.cast::<web_sys::Element>() else {
        return;
    };
    let Ok(radios) = container.query_selector_all("input[type=radio]") else {
        return;
    };
    for index in 0..radios.length() {
        if let Some(input) = radios
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(checked(&input.value()));
        }
    }
}
