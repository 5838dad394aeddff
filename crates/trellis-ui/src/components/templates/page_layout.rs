use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    #[prop_or_default]
    pub header: Option<Html>,
    #[prop_or_default]
    pub sidebar: Option<Html>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    /// Main content.
    #[prop_or_default]
    pub children: Children,
}

/// Header, optional sidebar, main and footer slots in a full-height column.
#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    let main = html! {
        <main class="flex-1 min-w-0">{ for props.children.iter() }</main>
    };
    html! {
        <div class={classes!("min-h-screen", "flex", "flex-col", "bg-base-100", props.class.clone())}>
            {props.header.clone().unwrap_or_default()}
            {match &props.sidebar {
                Some(sidebar) => html! {
                    <div class="flex flex-1">
                        <aside class="hidden w-64 shrink-0 border-r border-base-300 lg:block">{sidebar.clone()}</aside>
                        {main}
                    </div>
                },
                None => main,
            }}
            {props.footer.clone().unwrap_or_default()}
        </div>
    }
}
