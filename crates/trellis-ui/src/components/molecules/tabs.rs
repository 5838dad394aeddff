use crate::components::foundations::tokens_with;
use crate::components::hooks::use_controllable;
use trellis_core::items::OptionItem;
use trellis_core::style::{Orientation, Size, TabsStyle, tabs_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    #[prop_or_default]
    pub tabs: Vec<OptionItem>,
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub default_value: Option<String>,
    #[prop_or_default]
    pub style: TabsStyle,
    #[prop_or_default]
    pub size: Size,
    #[prop_or(Orientation::Horizontal)]
    pub orientation: Orientation,
    #[prop_or_default]
    pub class: Classes,
    /// Panel content for the active tab.
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let (current, select) = use_controllable(
        props.value.clone(),
        props.default_value.clone(),
        props.on_change.clone(),
    );
    let vertical = props.orientation == Orientation::Vertical;

    html! {
        <div class={classes!("flex", if vertical { "flex-row gap-4" } else { "flex-col gap-2" })}>
            <div
                role="tablist"
                aria-orientation={props.orientation.as_str()}
                class={tokens_with(tabs_tokens(props.style, props.size, props.orientation), &props.class)}
            >
                {for props.tabs.iter().map(|tab| {
                    let active = current.as_ref() == Some(&tab.value);
                    let onclick = {
                        let select = select.clone();
                        let value = tab.value.clone();
                        Callback::from(move |_: MouseEvent| select.emit(value.clone()))
                    };
                    html! {
                        <button
                            key={tab.value.clone()}
                            type="button"
                            role="tab"
                            class={classes!("tab", active.then_some("tab-active"))}
                            aria-selected={if active { "true" } else { "false" }}
                            disabled={tab.disabled}
                            onclick={onclick}
                        >
                            {tab.label.clone()}
                        </button>
                    }
                })}
            </div>
            {if props.children.is_empty() {
                Html::default()
            } else {
                html! {
                    <div role="tabpanel" class="flex-1">
                        { for props.children.iter() }
                    </div>
                }
            }}
        </div>
    }
}
