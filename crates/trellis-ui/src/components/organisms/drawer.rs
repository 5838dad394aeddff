//! Edge-anchored panel sharing the modal's overlay lifecycle.

use crate::components::foundations::{
    BasicProps, classes_from, merge_classes, render_container, report_misuse, tokens_with,
};
use crate::components::hooks::{OverlayOverrides, use_library_config, use_overlay};
use crate::components::organisms::modal::close_button;
use trellis_core::error::require_parent;
use trellis_core::style::{DrawerPlacement, Size, backdrop_tokens, drawer_panel_tokens};
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct DrawerContext {
    pub title_id: AttrValue,
    pub placement: DrawerPlacement,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct DrawerProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub placement: DrawerPlacement,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub close_on_escape: Option<bool>,
    #[prop_or_default]
    pub close_on_backdrop: Option<bool>,
    #[prop_or_default]
    pub exit_duration_ms: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    let library = use_library_config();
    let config = OverlayOverrides {
        close_on_escape: props.close_on_escape,
        close_on_backdrop: props.close_on_backdrop,
        exit_duration_ms: props.exit_duration_ms,
    }
    .apply(library.overlay);
    let overlay = use_overlay(props.open, config, props.on_close.clone());
    let title_id = use_memo((), |_| AttrValue::from(format!("drawer-title-{}", Uuid::new_v4())));

    if !overlay.phase.is_mounted() {
        return Html::default();
    }

    let visual = overlay.phase.visual();
    let context = DrawerContext {
        title_id: (*title_id).clone(),
        placement: props.placement,
        on_close: props.on_close.clone(),
    };
    html! {
        <ContextProvider<DrawerContext> context={context}>
            <div class="fixed inset-0 z-50">
                <div
                    class={classes_from(backdrop_tokens(visual))}
                    aria-hidden="true"
                    onclick={overlay.on_backdrop}
                ></div>
                <aside
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={(*title_id).clone()}
                    data-placement={props.placement.as_str()}
                    class={tokens_with(drawer_panel_tokens(props.placement, props.size, visual), &props.class)}
                >
                    { for props.children.iter() }
                </aside>
            </div>
        </ContextProvider<DrawerContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DrawerHeaderProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or(true)]
    pub closable: bool,
}

#[function_component(DrawerHeader)]
pub fn drawer_header(props: &DrawerHeaderProps) -> Html {
    let context = match require_parent(use_context::<DrawerContext>(), "DrawerHeader", "Drawer") {
        Ok(context) => context,
        Err(err) => return report_misuse(&err),
    };
    html! {
        <div class={merge_classes("flex items-center justify-between gap-4 border-b border-base-300 px-6 py-4", &props.class)}>
            <h2 id={context.title_id.clone()} class="text-lg font-semibold">
                { for props.children.iter() }
            </h2>
            {props.closable.then(|| html! { <DrawerClose /> }).unwrap_or_default()}
        </div>
    }
}

#[function_component(DrawerBody)]
pub fn drawer_body(props: &BasicProps) -> Html {
    if let Err(err) = require_parent(use_context::<DrawerContext>(), "DrawerBody", "Drawer") {
        return report_misuse(&err);
    }
    render_container(
        "div",
        merge_classes("flex-1 overflow-y-auto px-6 py-4", &props.class),
        props.id.as_ref(),
        &props.children,
    )
}

#[function_component(DrawerFooter)]
pub fn drawer_footer(props: &BasicProps) -> Html {
    if let Err(err) = require_parent(use_context::<DrawerContext>(), "DrawerFooter", "Drawer") {
        return report_misuse(&err);
    }
    render_container(
        "div",
        merge_classes("flex justify-end gap-2 border-t border-base-300 px-6 py-4", &props.class),
        props.id.as_ref(),
        &props.children,
    )
}

#[derive(Properties, PartialEq)]
pub struct DrawerCloseProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DrawerClose)]
pub fn drawer_close(props: &DrawerCloseProps) -> Html {
    let context = match require_parent(use_context::<DrawerContext>(), "DrawerClose", "Drawer") {
        Ok(context) => context,
        Err(err) => return report_misuse(&err),
    };
    close_button(&context.on_close, &props.class, &props.children)
}
