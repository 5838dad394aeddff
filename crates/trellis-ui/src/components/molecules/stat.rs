use trellis_core::items::Trend;
use trellis_core::style::{trend_class, trend_icon};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub trend: Option<Trend>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    let (value_class, icon) = props
        .trend
        .map(|trend| (Some(trend_class(trend)), Some(trend_icon(trend))))
        .unwrap_or_default();

    html! {
        <div class={classes!("stat", props.class.clone())}>
            <div class="stat-title">{props.title.clone()}</div>
            <div class={classes!("stat-value", value_class)}>{props.value.clone()}</div>
            {if props.description.is_some() || icon.is_some() {
                html! {
                    <div class={classes!("stat-desc", "flex", "items-center", "gap-1", value_class)}>
                        {icon.map(|icon| html! {
                            <span class={classes!("iconify", icon, "size-4")} aria-hidden="true"></span>
                        }).unwrap_or_default()}
                        {props.description.clone().unwrap_or_default()}
                    </div>
                }
            } else {
                Html::default()
            }}
        </div>
    }
}
