use trellis_core::items::TimelineEntry;
use trellis_core::style::Orientation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    #[prop_or_default]
    pub items: Vec<TimelineEntry>,
    #[prop_or_default]
    pub orientation: Orientation,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let axis = match props.orientation {
        Orientation::Horizontal => "timeline-horizontal",
        Orientation::Vertical => "timeline-vertical",
    };
    let last = props.items.len().saturating_sub(1);

    html! {
        <ul class={classes!("timeline", axis, props.class.clone())}>
            {for props.items.iter().enumerate().map(|(index, item)| {
                html! {
                    <li>
                        {(index > 0).then(|| html! { <hr /> }).unwrap_or_default()}
                        <div class="timeline-start text-xs opacity-70">{item.time.clone().unwrap_or_default()}</div>
                        <div class="timeline-middle">
                            <span class="iconify lucide--circle-dot size-4 text-primary" aria-hidden="true"></span>
                        </div>
                        <div class="timeline-end timeline-box">
                            <p class="font-semibold">{item.title.clone()}</p>
                            {item.detail.clone().map(|detail| html! { <p class="opacity-70 text-sm">{detail}</p> }).unwrap_or_default()}
                        </div>
                        {(index < last).then(|| html! { <hr /> }).unwrap_or_default()}
                    </li>
                }
            })}
        </ul>
    }
}
