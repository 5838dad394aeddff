use trellis_core::items::NavLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: AttrValue,
    #[prop_or_else(|| AttrValue::from("#"))]
    pub brand_href: AttrValue,
    #[prop_or_default]
    pub links: Vec<NavLink>,
    /// Right-aligned controls such as buttons or a theme toggle.
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub sticky: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn nav_items(links: &[NavLink]) -> Html {
    links
        .iter()
        .map(|link| {
            html! {
                <li key={link.href.clone()}>
                    <a
                        href={link.href.clone()}
                        class={classes!(link.active.then_some("menu-active"))}
                        aria-current={link.active.then_some("page")}
                    >
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <header class={classes!(
            "navbar",
            "bg-base-100",
            "border-b",
            "border-base-300",
            props.sticky.then_some("sticky top-0 z-40"),
            props.class.clone()
        )}>
            <div class="navbar-start gap-2">
                <button
                    type="button"
                    class="btn btn-ghost btn-square lg:hidden"
                    aria-label="Toggle navigation"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span class="iconify lucide--menu size-5"></span>
                </button>
                <a class="btn btn-ghost text-xl" href={props.brand_href.clone()}>{props.brand.clone()}</a>
            </div>
            <nav class="navbar-center hidden lg:flex" aria-label="Main">
                <ul class="menu menu-horizontal px-1">{nav_items(&props.links)}</ul>
            </nav>
            <div class="navbar-end gap-2">{props.actions.clone().unwrap_or_default()}</div>
            {menu_open.then(|| html! {
                <nav class="absolute left-0 right-0 top-full bg-base-100 shadow lg:hidden" aria-label="Main">
                    <ul class="menu">{nav_items(&props.links)}</ul>
                </nav>
            }).unwrap_or_default()}
        </header>
    }
}
