use trellis_core::items::LinkColumn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub columns: Vec<LinkColumn>,
    #[prop_or_default]
    pub copyright: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class={classes!("bg-base-200", "text-base-content", props.class.clone())}>
            <div class="footer sm:footer-horizontal p-10">
                { for props.children.iter() }
                {for props.columns.iter().map(|column| html! {
                    <nav key={column.title.clone()}>
                        <h6 class="footer-title">{column.title.clone()}</h6>
                        {for column.links.iter().map(|link| html! {
                            <a class="link link-hover" href={link.href.clone()}>{link.label.clone()}</a>
                        })}
                    </nav>
                })}
            </div>
            {props.copyright.clone().map(|text| html! {
                <div class="footer footer-center border-t border-base-300 p-4 text-sm">
                    <p>{text}</p>
                </div>
            }).unwrap_or_default()}
        </footer>
    }
}
