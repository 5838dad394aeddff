#![cfg(target_arch = "wasm32")]

use gloo::utils::{body, document};
use gloo_timers::future::TimeoutFuture;
use trellis_core::schedule::PageEffects;
use trellis_test_support::{CallRecorder, letter_options};
use trellis_ui::components::atoms::checkbox::{Checkbox, CheckboxProps};
use trellis_ui::components::atoms::select::{Select, SelectProps};
use trellis_ui::components::molecules::card::{Card, CardProps};
use trellis_ui::components::molecules::radio_group::{RadioGroup, RadioGroupProps};
use trellis_ui::components::platform::DocumentEffects;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let root = document().create_element("div").expect("create root");
    body().append_child(&root).expect("attach root");
    root
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

fn radio(root: &Element, value: &str) -> HtmlInputElement {
    root.query_selector(&format!("input[type=radio][value={value}]"))
        .expect("valid selector")
        .expect("radio rendered")
        .unchecked_into()
}

#[wasm_bindgen_test]
async fn controlled_radio_group_keeps_supplied_value_when_change_is_ignored() {
    let root = mount_point();
    let changes = CallRecorder::<String>::new();
    let record = changes.clone();
    let props = yew::props!(RadioGroupProps {
        name: "controlled",
        options: letter_options(3),
        value: Some("a".to_string()),
        on_change: Callback::from(move |value| record.record(value)),
    });
    let _app = yew::Renderer::<RadioGroup>::with_root_and_props(root.clone(), props).render();
    settle().await;

    for value in ["b", "c", "b"] {
        radio(&root, value).click();
        settle().await;
        assert!(radio(&root, "a").checked());
        assert!(!radio(&root, value).checked());
    }
    assert_eq!(changes.calls(), vec!["b", "c", "b"]);
}

#[wasm_bindgen_test]
async fn uncontrolled_radio_group_follows_clicks() {
    let root = mount_point();
    let props = yew::props!(RadioGroupProps {
        name: "uncontrolled",
        options: letter_options(3),
        default_value: Some("a".to_string()),
    });
    let _app = yew::Renderer::<RadioGroup>::with_root_and_props(root.clone(), props).render();
    settle().await;

    radio(&root, "c").click();
    settle().await;
    assert!(radio(&root, "c").checked());
    assert!(!radio(&root, "a").checked());
}

#[wasm_bindgen_test]
async fn checkbox_reports_click_but_shows_its_checked_prop() {
    let root = mount_point();
    let changes = CallRecorder::<bool>::new();
    let record = changes.clone();
    let props = yew::props!(CheckboxProps {
        checked: false,
        onchange: Callback::from(move |checked| record.record(checked)),
    });
    let _app = yew::Renderer::<Checkbox>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let input: HtmlInputElement = root
        .query_selector("input[type=checkbox]")
        .expect("valid selector")
        .expect("checkbox rendered")
        .unchecked_into();
    input.click();
    settle().await;
    assert!(!input.checked());
    assert_eq!(changes.calls(), vec![true]);
}

#[wasm_bindgen_test]
async fn controlled_select_restores_supplied_value() {
    let root = mount_point();
    let changes = CallRecorder::<String>::new();
    let record = changes.clone();
    let props = yew::props!(SelectProps {
        options: letter_options(3),
        value: Some("a".to_string()),
        on_change: Callback::from(move |value| record.record(value)),
    });
    let _app = yew::Renderer::<Select>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let select: HtmlSelectElement = root
        .query_selector("select")
        .expect("valid selector")
        .expect("select rendered")
        .unchecked_into();
    select.set_value("c");
    let change = Event::new("change").expect("change event");
    select.dispatch_event(&change).expect("dispatch change");
    settle().await;

    assert_eq!(select.value(), "a");
    assert_eq!(changes.calls(), vec!["c"]);
}

#[wasm_bindgen_test]
async fn card_without_id_renders_no_id_attribute() {
    let root = mount_point();
    let props = yew::props!(CardProps {
        title: "Untitled",
    });
    let _app = yew::Renderer::<Card>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let card = root
        .query_selector(".card")
        .expect("valid selector")
        .expect("card rendered");
    assert!(!card.has_attribute("id"));
}

#[wasm_bindgen_test]
fn overlapping_overlays_share_the_body_scroll_lock() {
    let style = body().style();
    style.remove_property("overflow").expect("reset overflow");
    let mut drawer = DocumentEffects::default();
    let mut modal = DocumentEffects::default();

    drawer.lock_scroll();
    modal.lock_scroll();
    drawer.unlock_scroll();
    assert_eq!(style.get_property_value("overflow").expect("read overflow"), "hidden");

    modal.unlock_scroll();
    assert_eq!(style.get_property_value("overflow").expect("read overflow"), "");
}
