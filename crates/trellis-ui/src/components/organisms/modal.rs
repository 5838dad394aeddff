//! Centered dialog driven by the overlay lifecycle.
//!
//! # Design
//! - The dialog stays mounted through the exit transition and renders
//!   nothing once the overlay reports `Unmounted`.
//! - Sub-components read [`ModalContext`]; outside a `Modal` they log the
//!   misuse and render nothing.

use crate::components::foundations::{
    BasicProps, classes_from, merge_classes, render_container, report_misuse, tokens_with,
};
use crate::components::hooks::{OverlayOverrides, use_library_config, use_overlay};
use trellis_core::error::require_parent;
use trellis_core::style::{ModalSize, backdrop_tokens, modal_box_tokens};
use uuid::Uuid;
use yew::prelude::*;

/// Shared with the modal's sub-components.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    /// Id of the heading that labels the dialog.
    pub title_id: AttrValue,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub size: ModalSize,
    /// Overrides the library default when set.
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
    /// Requests closing; the parent decides by flipping `open`.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let library = use_library_config();
    let config = OverlayOverrides {
        close_on_escape: props.close_on_escape,
        close_on_backdrop: props.close_on_backdrop,
        exit_duration_ms: props.exit_duration_ms,
    }
    .apply(library.overlay);
    let overlay = use_overlay(props.open, config, props.on_close.clone());
    let title_id = use_memo((), |_| AttrValue::from(format!("modal-title-{}", Uuid::new_v4())));

    if !overlay.phase.is_mounted() {
        return Html::default();
    }

    let visual = overlay.phase.visual();
    let context = ModalContext {
        title_id: (*title_id).clone(),
        on_close: props.on_close.clone(),
    };
    html! {
        <ContextProvider<ModalContext> context={context}>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class={classes_from(backdrop_tokens(visual))}
                    aria-hidden="true"
                    onclick={overlay.on_backdrop}
                ></div>
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={(*title_id).clone()}
                    class={tokens_with(modal_box_tokens(props.size, visual), &props.class)}
                >
                    { for props.children.iter() }
                </div>
            </div>
        </ContextProvider<ModalContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalHeaderProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    /// Renders a close button next to the title.
    #[prop_or(true)]
    pub closable: bool,
}

#[function_component(ModalHeader)]
pub fn modal_header(props: &ModalHeaderProps) -> Html {
    let context = match require_parent(use_context::<ModalContext>(), "ModalHeader", "Modal") {
        Ok(context) => context,
        Err(err) => return report_misuse(&err),
    };
    html! {
        <div class={merge_classes("flex items-start justify-between gap-4 mb-4", &props.class)}>
            <h3 id={context.title_id.clone()} class="text-lg font-bold">
                { for props.children.iter() }
            </h3>
            {props.closable.then(|| html! { <ModalClose /> }).unwrap_or_default()}
        </div>
    }
}

#[function_component(ModalBody)]
pub fn modal_body(props: &BasicProps) -> Html {
    if let Err(err) = require_parent(use_context::<ModalContext>(), "ModalBody", "Modal") {
        return report_misuse(&err);
    }
    render_container(
        "div",
        merge_classes("py-2", &props.class),
        props.id.as_ref(),
        &props.children,
    )
}

#[function_component(ModalFooter)]
pub fn modal_footer(props: &BasicProps) -> Html {
    if let Err(err) = require_parent(use_context::<ModalContext>(), "ModalFooter", "Modal") {
        return report_misuse(&err);
    }
    render_container(
        "div",
        merge_classes("modal-action", &props.class),
        props.id.as_ref(),
        &props.children,
    )
}

#[derive(Properties, PartialEq)]
pub struct ModalCloseProps {
    #[prop_or_default]
    pub class: Classes,
    /// Button content; an `x` icon when empty.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalClose)]
pub fn modal_close(props: &ModalCloseProps) -> Html {
    let context = match require_parent(use_context::<ModalContext>(), "ModalClose", "Modal") {
        Ok(context) => context,
        Err(err) => return report_misuse(&err),
    };
    close_button(&context.on_close, &props.class, &props.children)
}

/// Close control shared by modal and drawer sub-components.
pub(crate) fn close_button(on_close: &Callback<()>, class: &Classes, children: &Children) -> Html {
    let onclick = on_close.reform(|_: MouseEvent| ());
    if children.is_empty() {
        html! {
            <button
                type="button"
                class={merge_classes("btn btn-ghost btn-sm btn-circle", class)}
                aria-label="Close"
                onclick={onclick}
            >
                <span class="iconify lucide--x size-4"></span>
            </button>
        }
    } else {
        html! {
            <button type="button" class={merge_classes("btn", class)} onclick={onclick}>
                { for children.iter() }
            </button>
        }
    }
}
