//! File listing with seven presentations sharing one selection model.
//!
//! Selection is a list of file ids resolved like any other controllable value;
//! the filter variant additionally keeps the active kind chip as local state.

use crate::components::foundations::tokens_with;
use crate::components::hooks::use_controllable;
use trellis_core::items::{FileItem, FileKind};
use trellis_core::style::{FileListVariant, file_list_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    #[prop_or_default]
    pub files: Vec<FileItem>,
    #[prop_or_default]
    pub variant: FileListVariant,
    /// Shows a checkbox per file.
    #[prop_or_default]
    pub selectable: bool,
    #[prop_or_default]
    pub selected: Option<Vec<String>>,
    #[prop_or_default]
    pub default_selected: Option<Vec<String>>,
    /// Shows a remove button per file.
    #[prop_or_default]
    pub removable: bool,
    #[prop_or_else(|| AttrValue::from("No files"))]
    pub empty_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Emits `(id, selected)` after each toggle.
    #[prop_or_default]
    pub on_select: Callback<(AttrValue, bool)>,
    #[prop_or_default]
    pub on_remove: Callback<AttrValue>,
}

struct RowControls {
    selectable: bool,
    removable: bool,
    selected: Vec<String>,
    toggle: Callback<AttrValue>,
    remove: Callback<AttrValue>,
}

impl RowControls {
    fn is_selected(&self, file: &FileItem) -> bool {
        self.selected.contains(&file.id)
    }

    fn checkbox(&self, file: &FileItem) -> Html {
        if !self.selectable {
            return Html::default();
        }
        let id = AttrValue::from(file.id.clone());
        let rendered = self.is_selected(file);
        let toggle = self.toggle.clone();
        let onchange = Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                input.set_checked(rendered);
            }
            toggle.emit(id.clone());
        });
        html! {
            <input
                type="checkbox"
                class="checkbox checkbox-sm"
                aria-label={format!("Select {}", file.name)}
                checked={rendered}
                onchange={onchange}
            />
        }
    }

    fn remove_button(&self, file: &FileItem) -> Html {
        if !self.removable {
            return Html::default();
        }
        let id = AttrValue::from(file.id.clone());
        let onclick = self.remove.reform(move |_: MouseEvent| id.clone());
        html! {
            <button
                type="button"
                class="btn btn-ghost btn-xs btn-circle"
                aria-label={format!("Remove {}", file.name)}
                onclick={onclick}
            >
                <span class="iconify lucide--x size-4"></span>
            </button>
        }
    }
}

fn kind_icon(kind: FileKind, size: &'static str) -> Html {
    html! { <span class={classes!("iconify", kind.icon(), size, "opacity-70")} aria-hidden="true"></span> }
}

fn meta_line(file: &FileItem) -> Html {
    let parts: Vec<String> = [file.size_label(), file.modified_label()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return Html::default();
    }
    html! { <span class="text-xs opacity-60">{parts.join(" · ")}</span> }
}

fn kinds_present(files: &[FileItem]) -> Vec<FileKind> {
    let mut kinds = Vec::new();
    for kind in files.iter().map(FileItem::resolved_kind) {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

fn render_list(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    html! {
        <ul class={classes}>
            {for files.iter().map(|file| html! {
                <li
                    key={file.id.clone()}
                    class={classes!(
                        "list-row",
                        "items-center",
                        controls.is_selected(file).then_some("bg-base-200")
                    )}
                >
                    {controls.checkbox(file)}
                    {kind_icon(file.resolved_kind(), "size-5")}
                    <div class="list-col-grow flex flex-col">
                        <span class="font-medium truncate">{file.name.clone()}</span>
                        {meta_line(file)}
                    </div>
                    {controls.remove_button(file)}
                </li>
            })}
        </ul>
    }
}

fn render_cards(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    html! {
        <div class={classes}>
            {for files.iter().map(|file| html! {
                <div
                    key={file.id.clone()}
                    class={classes!(
                        "card",
                        "card-border",
                        "card-sm",
                        "bg-base-100",
                        controls.is_selected(file).then_some("ring-2 ring-primary")
                    )}
                >
                    <div class="card-body flex-row items-center gap-3">
                        {controls.checkbox(file)}
                        {kind_icon(file.resolved_kind(), "size-8")}
                        <div class="flex-1 flex flex-col">
                            <span class="card-title text-sm">{file.name.clone()}</span>
                            <span class="text-xs opacity-60">{file.resolved_kind().label()}</span>
                            {meta_line(file)}
                        </div>
                        {controls.remove_button(file)}
                    </div>
                </div>
            })}
        </div>
    }
}

fn render_grid(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    html! {
        <div class={classes}>
            {for files.iter().map(|file| html! {
                <div
                    key={file.id.clone()}
                    class={classes!(
                        "relative",
                        "flex",
                        "flex-col",
                        "items-center",
                        "gap-2",
                        "rounded-box",
                        "bg-base-200",
                        "p-4",
                        controls.is_selected(file).then_some("ring-2 ring-primary")
                    )}
                >
                    <div class="absolute top-2 left-2">{controls.checkbox(file)}</div>
                    <div class="absolute top-2 right-2">{controls.remove_button(file)}</div>
                    {kind_icon(file.resolved_kind(), "size-12")}
                    <span class="text-sm font-medium truncate max-w-full">{file.name.clone()}</span>
                    <span class="text-xs opacity-60">{file.size_label()}</span>
                </div>
            })}
        </div>
    }
}

fn render_table(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class={classes}>
                <thead>
                    <tr>
                        {controls.selectable.then(|| html! { <th></th> }).unwrap_or_default()}
                        <th>{"Name"}</th>
                        <th>{"Kind"}</th>
                        <th>{"Size"}</th>
                        <th>{"Modified"}</th>
                        {controls.removable.then(|| html! { <th></th> }).unwrap_or_default()}
                    </tr>
                </thead>
                <tbody>
                    {for files.iter().map(|file| html! {
                        <tr key={file.id.clone()} class={classes!(controls.is_selected(file).then_some("bg-base-200"))}>
                            {controls.selectable.then(|| html! { <td>{controls.checkbox(file)}</td> }).unwrap_or_default()}
                            <td>
                                <div class="flex items-center gap-2">
                                    {kind_icon(file.resolved_kind(), "size-4")}
                                    {file.name.clone()}
                                </div>
                            </td>
                            <td>{file.resolved_kind().label()}</td>
                            <td>{file.size_label()}</td>
                            <td>{file.modified_label()}</td>
                            {controls.removable.then(|| html! { <td>{controls.remove_button(file)}</td> }).unwrap_or_default()}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_badges(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    html! {
        <div class={classes}>
            {for files.iter().map(|file| {
                let onclick = controls.selectable.then(|| {
                    let id = AttrValue::from(file.id.clone());
                    controls.toggle.reform(move |_: MouseEvent| id.clone())
                });
                html! {
                    <span
                        key={file.id.clone()}
                        class={classes!(
                            "badge",
                            "gap-1",
                            if controls.is_selected(file) { "badge-primary" } else { "badge-outline" },
                            controls.selectable.then_some("cursor-pointer")
                        )}
                        onclick={onclick}
                    >
                        {kind_icon(file.resolved_kind(), "size-3")}
                        {file.name.clone()}
                        {controls.remove_button(file)}
                    </span>
                }
            })}
        </div>
    }
}

fn render_inline(files: &[&FileItem], controls: &RowControls, classes: Classes) -> Html {
    let last = files.len().saturating_sub(1);
    html! {
        <p class={classes}>
            {for files.iter().enumerate().map(|(index, file)| {
                let separator = if index < last { ", " } else { "" };
                let name = if controls.selectable {
                    let id = AttrValue::from(file.id.clone());
                    let onclick = controls.toggle.reform(move |_: MouseEvent| id.clone());
                    html! {
                        <button
                            type="button"
                            class={classes!("link", controls.is_selected(file).then_some("link-primary"))}
                            aria-pressed={if controls.is_selected(file) { "true" } else { "false" }}
                            onclick={onclick}
                        >
                            {file.name.clone()}
                        </button>
                    }
                } else {
                    html! { <span>{file.name.clone()}</span> }
                };
                html! {
                    <>
                        {name}
                        {controls.remove_button(file)}
                        {separator}
                    </>
                }
            })}
        </p>
    }
}

#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    let (current, select) = use_controllable(
        props.selected.clone(),
        props.default_selected.clone(),
        Callback::noop(),
    );
    let kind_filter = use_state_eq(|| None::<FileKind>);
    let selected = current.unwrap_or_default();

    let toggle = {
        let selected = selected.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |id: AttrValue| {
            let was_selected = selected.iter().any(|entry| entry.as_str() == id.as_str());
            let next: Vec<String> = if was_selected {
                selected
                    .iter()
                    .filter(|entry| entry.as_str() != id.as_str())
                    .cloned()
                    .collect()
            } else {
                selected.iter().cloned().chain([id.to_string()]).collect()
            };
            select.emit(next);
            on_select.emit((id, !was_selected));
        })
    };
    let controls = RowControls {
        selectable: props.selectable,
        removable: props.removable,
        selected,
        toggle,
        remove: props.on_remove.clone(),
    };

    let filtering = props.variant == FileListVariant::Filter;
    let visible: Vec<&FileItem> = props
        .files
        .iter()
        .filter(|file| !filtering || kind_filter.is_none_or(|kind| file.resolved_kind() == kind))
        .collect();
    let classes = tokens_with(file_list_tokens(props.variant), &props.class);

    let body = if visible.is_empty() {
        html! { <p class="text-sm opacity-70 p-4">{props.empty_label.clone()}</p> }
    } else {
        match props.variant {
            FileListVariant::List | FileListVariant::Filter => {
                render_list(&visible, &controls, classes)
            }
            FileListVariant::Card => render_cards(&visible, &controls, classes),
            FileListVariant::Grid => render_grid(&visible, &controls, classes),
            FileListVariant::Table => render_table(&visible, &controls, classes),
            FileListVariant::Badge => render_badges(&visible, &controls, classes),
            FileListVariant::Inline => render_inline(&visible, &controls, classes),
        }
    };

    if !filtering {
        return body;
    }

    let chip = |label: &'static str, kind: Option<FileKind>| {
        let active = *kind_filter == kind;
        let kind_filter = kind_filter.clone();
        let onclick = Callback::from(move |_: MouseEvent| kind_filter.set(kind));
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-xs", if active { "btn-primary" } else { "btn-ghost" })}
                aria-pressed={if active { "true" } else { "false" }}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="flex flex-col gap-2">
            <div class="flex flex-wrap gap-1" role="toolbar" aria-label="Filter by kind">
                {chip("All", None)}
                {for kinds_present(&props.files).into_iter().map(|kind| chip(kind.label(), Some(kind)))}
            </div>
            {body}
        </div>
    }
}
