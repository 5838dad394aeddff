//! Dashboard composition: stats, a file table with confirm-to-remove, and an
//! activity drawer.

use crate::components::atoms::Button;
use crate::components::molecules::{Alert, Breadcrumbs, FileList, Tabs, Timeline};
use crate::components::organisms::{
    Drawer, DrawerBody, DrawerHeader, Header, Modal, ModalBody, ModalFooter, ModalHeader,
    StatsSection,
};
use crate::components::templates::{Container, PageLayout, Stack};
use trellis_core::items::{FileItem, NavLink, OptionItem, StatItem, TimelineEntry};
use trellis_core::style::{
    AlertKind, ButtonVariant, Color, Columns, FileListVariant, ModalSize, Padding, Size,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    #[prop_or_else(|| AttrValue::from("Trellis"))]
    pub brand: AttrValue,
    #[prop_or_default]
    pub nav: Vec<NavLink>,
    #[prop_or_default]
    pub breadcrumbs: Vec<NavLink>,
    #[prop_or_default]
    pub stats: Vec<StatItem>,
    #[prop_or_default]
    pub files: Vec<FileItem>,
    #[prop_or_default]
    pub activity: Vec<TimelineEntry>,
    #[prop_or_default]
    pub on_select_file: Callback<(AttrValue, bool)>,
    /// Emits after the user confirms the removal dialog.
    #[prop_or_default]
    pub on_remove_file: Callback<AttrValue>,
}

fn view_tabs() -> Vec<OptionItem> {
    vec![
        OptionItem::new(String::from("table"), "Table"),
        OptionItem::new(String::from("grid"), "Grid"),
        OptionItem::new(String::from("list"), "List"),
    ]
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let view = use_state_eq(|| FileListVariant::Table);
    let pending_removal = use_state_eq(|| None::<AttrValue>);
    let activity_open = use_state_eq(|| false);

    let on_view = {
        let view = view.clone();
        Callback::from(move |value: String| view.set(value.parse().unwrap_or_default()))
    };
    let request_removal = {
        let pending_removal = pending_removal.clone();
        Callback::from(move |id: AttrValue| pending_removal.set(Some(id)))
    };
    let cancel_removal = {
        let pending_removal = pending_removal.clone();
        Callback::from(move |()| pending_removal.set(None))
    };
    let confirm_removal = {
        let pending_removal = pending_removal.clone();
        let on_remove = props.on_remove_file.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = (*pending_removal).clone() {
                on_remove.emit(id);
            }
            pending_removal.set(None);
        })
    };
    let open_activity = {
        let activity_open = activity_open.clone();
        Callback::from(move |_: MouseEvent| activity_open.set(true))
    };
    let close_activity = {
        let activity_open = activity_open.clone();
        Callback::from(move |()| activity_open.set(false))
    };

    let pending_name = (*pending_removal).as_ref().and_then(|id| {
        props
            .files
            .iter()
            .find(|file| file.id == id.as_str())
            .map(|file| file.name.clone())
    });

    let header = html! {
        <Header
            brand={props.brand.clone()}
            links={props.nav.clone()}
            actions={html! {
                <Button size={Size::Sm} variant={ButtonVariant::Ghost} onclick={open_activity}>
                    <span class="iconify lucide--activity size-4" aria-hidden="true"></span>
                    {"Activity"}
                </Button>
            }}
        />
    };

    html! {
        <PageLayout header={header}>
            <Container class="py-8">
                <Stack gap={Padding::Lg}>
                    <Breadcrumbs items={props.breadcrumbs.clone()} />
                    <h1 class="text-3xl font-bold">{"Overview"}</h1>
                    <StatsSection stats={props.stats.clone()} columns={Columns::Four} />
                    <Alert kind={AlertKind::Info} dismissible={true} title="Storage check">
                        {"Files older than 90 days are archived automatically."}
                    </Alert>
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-semibold">{"Files"}</h2>
                        <Tabs
                            tabs={view_tabs()}
                            value={Some(view.as_str().to_owned())}
                            on_change={on_view}
                        />
                    </div>
                    <FileList
                        files={props.files.clone()}
                        variant={*view}
                        selectable={true}
                        removable={true}
                        on_select={props.on_select_file.clone()}
                        on_remove={request_removal}
                    />
                </Stack>
            </Container>
            <Modal
                open={pending_removal.is_some()}
                size={ModalSize::Sm}
                on_close={cancel_removal.clone()}
            >
                <ModalHeader>{"Remove file?"}</ModalHeader>
                <ModalBody>
                    <p>
                        {pending_name.map_or_else(
                            || String::from("This file will be removed."),
                            |name| format!("{name} will be removed."),
                        )}
                    </p>
                </ModalBody>
                <ModalFooter>
                    <Button variant={ButtonVariant::Ghost} onclick={cancel_removal.reform(|_: MouseEvent| ())}>
                        {"Cancel"}
                    </Button>
                    <Button tone={Some(Color::Error)} onclick={confirm_removal}>{"Remove"}</Button>
                </ModalFooter>
            </Modal>
            <Drawer open={*activity_open} on_close={close_activity}>
                <DrawerHeader>{"Recent activity"}</DrawerHeader>
                <DrawerBody>
                    <Timeline items={props.activity.clone()} />
                </DrawerBody>
            </Drawer>
        </PageLayout>
    }
}
