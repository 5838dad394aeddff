use crate::components::foundations::{classes_from, optional_text};
use crate::components::molecules::Stat;
use trellis_core::items::StatItem;
use trellis_core::style::{Columns, grid_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub stats: Vec<StatItem>,
    #[prop_or_default]
    pub columns: Columns,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    html! {
        <section class={classes!("flex", "flex-col", "gap-6", props.class.clone())}>
            {props.title.clone().map(|title| html! { <h2 class="text-2xl font-bold">{title}</h2> }).unwrap_or_default()}
            {optional_text(props.description.as_ref(), "opacity-70")}
            <div class={classes!(classes_from(grid_tokens(props.columns)), "gap-4")}>
                {for props.stats.iter().map(|item| html! {
                    <Stat
                        key={item.label.clone()}
                        class="rounded-box bg-base-100 shadow"
                        title={item.label.clone()}
                        value={item.value.clone()}
                        description={item.description.clone().map(AttrValue::from)}
                        trend={item.trend}
                    />
                })}
            </div>
        </section>
    }
}
