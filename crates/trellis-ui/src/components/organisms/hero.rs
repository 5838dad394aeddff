use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    /// Image URL shown beside the copy.
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class={classes!("hero", "min-h-[300px]", "bg-base-200", props.class.clone())}>
            <div class={classes!(
                "hero-content",
                "flex-col",
                (!props.centered).then_some("lg:flex-row-reverse"),
                props.centered.then_some("text-center")
            )}>
                {props.image.clone().map(|src| html! {
                    <img src={src} alt="" class="max-w-sm rounded-lg shadow-2xl" />
                }).unwrap_or_default()}
                <div class={classes!(props.centered.then_some("max-w-2xl"))}>
                    <h1 class="text-5xl font-bold">{props.title.clone()}</h1>
                    {props.subtitle.clone().map(|subtitle| html! { <p class="py-6 text-lg opacity-80">{subtitle}</p> }).unwrap_or_default()}
                    {props.actions.clone().map(|actions| html! {
                        <div class={classes!("flex", "flex-wrap", "gap-2", props.centered.then_some("justify-center"))}>{actions}</div>
                    }).unwrap_or_default()}
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
