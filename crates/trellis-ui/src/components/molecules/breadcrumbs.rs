use trellis_core::items::NavLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbsProps {
    #[prop_or_default]
    pub items: Vec<NavLink>,
    #[prop_or_default]
    pub class: Classes,
}

/// Trail of links; the last entry is the current page and is not a link.
#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    let last = props.items.len().saturating_sub(1);
    html! {
        <nav class={classes!("breadcrumbs", "text-sm", props.class.clone())} aria-label="Breadcrumb">
            <ul>
                {for props.items.iter().enumerate().map(|(index, item)| {
                    if index == last {
                        html! { <li><span aria-current="page">{item.label.clone()}</span></li> }
                    } else {
                        html! { <li><a href={item.href.clone()}>{item.label.clone()}</a></li> }
                    }
                })}
            </ul>
        </nav>
    }
}
