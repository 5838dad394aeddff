use super::{Story, StoryPage, use_actions, use_fixtures};
use crate::components::atoms::Button;
use crate::components::organisms::{
    CtaSection, Drawer, DrawerBody, DrawerClose, DrawerFooter, DrawerHeader, Footer, Header, Hero,
    Modal, ModalBody, ModalClose, ModalFooter, ModalHeader, StatsSection,
};
use trellis_core::style::{
    ButtonVariant, Color, Columns, CtaVariant, DrawerPlacement, ModalSize, Size,
};
use yew::prelude::*;

#[function_component(OrganismsStory)]
pub(crate) fn organisms_story() -> Html {
    let actions = use_actions();
    let fixtures = use_fixtures();
    let modal_size = use_state_eq(|| None::<ModalSize>);
    let drawer_placement = use_state_eq(|| None::<DrawerPlacement>);

    let close_modal = {
        let modal_size = modal_size.clone();
        let log = actions.callback::<()>("Modal.on_close");
        Callback::from(move |()| {
            log.emit(());
            modal_size.set(None);
        })
    };
    let close_drawer = {
        let drawer_placement = drawer_placement.clone();
        let log = actions.callback::<()>("Drawer.on_close");
        Callback::from(move |()| {
            log.emit(());
            drawer_placement.set(None);
        })
    };

    html! {
        <StoryPage title="Organisms" description="Overlays and page-level sections.">
            <Story
                name="Modal"
                note="Escape, the backdrop, and the close buttons all request closing; the exit transition plays before unmount."
            >
                <div class="flex flex-wrap gap-2">
                    {for ModalSize::ALL.iter().map(|&size| {
                        let modal_size = modal_size.clone();
                        html! {
                            <Button
                                key={size.as_str()}
                                variant={ButtonVariant::Outline}
                                onclick={Callback::from(move |_: MouseEvent| modal_size.set(Some(size)))}
                            >
                                {format!("Open {}", size.as_str())}
                            </Button>
                        }
                    })}
                </div>
                <Modal
                    open={modal_size.is_some()}
                    size={(*modal_size).unwrap_or_default()}
                    on_close={close_modal.clone()}
                >
                    <ModalHeader>{"Invite teammates"}</ModalHeader>
                    <ModalBody>
                        <p>{"Teammates receive an email with a join link that expires in seven days."}</p>
                    </ModalBody>
                    <ModalFooter>
                        <ModalClose class="btn-ghost">{"Cancel"}</ModalClose>
                        <Button tone={Some(Color::Primary)} onclick={close_modal.reform(|_: MouseEvent| ())}>
                            {"Send invites"}
                        </Button>
                    </ModalFooter>
                </Modal>
            </Story>
            <Story name="Drawer">
                <div class="flex flex-wrap gap-2">
                    {for DrawerPlacement::ALL.iter().map(|&placement| {
                        let drawer_placement = drawer_placement.clone();
                        html! {
                            <Button
                                key={placement.as_str()}
                                variant={ButtonVariant::Outline}
                                onclick={Callback::from(move |_: MouseEvent| drawer_placement.set(Some(placement)))}
                            >
                                {format!("Open {}", placement.as_str())}
                            </Button>
                        }
                    })}
                </div>
                <Drawer
                    open={drawer_placement.is_some()}
                    placement={(*drawer_placement).unwrap_or_default()}
                    size={Size::Sm}
                    on_close={close_drawer}
                >
                    <DrawerHeader>{"Filters"}</DrawerHeader>
                    <DrawerBody>
                        <p class="opacity-70">{"Drawer content scrolls independently of the page."}</p>
                    </DrawerBody>
                    <DrawerFooter>
                        <DrawerClose class="btn-primary">{"Done"}</DrawerClose>
                    </DrawerFooter>
                </Drawer>
            </Story>
            <Story name="Misplaced sub-component" note="Rendered outside a Modal: logs an error to the console and renders nothing.">
                <ModalBody>{"You should not see this."}</ModalBody>
            </Story>
            <Story name="Header">
                <Header
                    brand="Trellis"
                    links={fixtures.nav.clone()}
                    actions={html! { <Button size={Size::Sm} tone={Some(Color::Primary)}>{"Sign in"}</Button> }}
                />
            </Story>
            <Story name="Hero">
                <Hero
                    title="Ship faster"
                    subtitle="Composable parts with predictable state."
                    actions={html! {
                        <Button
                            tone={Some(Color::Primary)}
                            onclick={actions.callback::<()>("Hero.cta").reform(|_: MouseEvent| ())}
                        >
                            {"Get started"}
                        </Button>
                    }}
                />
            </Story>
            <Story name="StatsSection">
                <StatsSection
                    title="Usage"
                    description="Last 30 days."
                    stats={fixtures.stats.clone()}
                    columns={Columns::Four}
                />
            </Story>
            {for CtaVariant::ALL.iter().map(|variant| html! {
                <Story key={variant.as_str()} name={format!("CtaSection ({})", variant.as_str())}>
                    <CtaSection
                        variant={*variant}
                        title="Start your trial"
                        description="No card required."
                        primary_label="Start now"
                        secondary_label="Talk to sales"
                        on_primary={actions.callback::<()>("CtaSection.on_primary")}
                        on_secondary={actions.callback::<()>("CtaSection.on_secondary")}
                    />
                </Story>
            })}
            <Story name="Footer">
                <Footer columns={fixtures.footer_columns.clone()} copyright="© Trellis contributors" />
            </Story>
        </StoryPage>
    }
}
