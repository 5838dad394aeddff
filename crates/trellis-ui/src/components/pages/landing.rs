use crate::components::atoms::{Badge, Button};
use crate::components::molecules::Card;
use crate::components::organisms::{CtaSection, Footer, Header, Hero, StatsSection};
use crate::components::templates::{Container, Grid, PageLayout, Section};
use trellis_core::items::{LinkColumn, NavLink, StatItem};
use trellis_core::style::{ButtonVariant, CardVariant, Color, Columns, CtaVariant, Size, Surface};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    #[prop_or_else(|| AttrValue::from("Trellis"))]
    pub brand: AttrValue,
    #[prop_or_default]
    pub nav: Vec<NavLink>,
    #[prop_or_default]
    pub stats: Vec<StatItem>,
    #[prop_or_default]
    pub footer_columns: Vec<LinkColumn>,
    #[prop_or_default]
    pub on_get_started: Callback<()>,
    #[prop_or_default]
    pub on_learn_more: Callback<()>,
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "lucide--layers",
        "Layered components",
        "Atoms compose into molecules, organisms and full pages.",
    ),
    (
        "lucide--toggle-right",
        "Controlled or not",
        "Selection controls work with or without a parent-owned value.",
    ),
    (
        "lucide--panels-top-left",
        "Animated overlays",
        "Modals and drawers stay mounted until their exit transition ends.",
    ),
];

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let get_started = props.on_get_started.reform(|_: MouseEvent| ());
    let learn_more = props.on_learn_more.reform(|_: MouseEvent| ());
    let header = html! {
        <Header
            brand={props.brand.clone()}
            links={props.nav.clone()}
            sticky={true}
            actions={html! {
                <Button size={Size::Sm} tone={Some(Color::Primary)} onclick={get_started.clone()}>
                    {"Get started"}
                </Button>
            }}
        />
    };
    let footer = html! {
        <Footer
            columns={props.footer_columns.clone()}
            copyright={AttrValue::from(format!("© {} contributors", props.brand))}
        />
    };

    html! {
        <PageLayout header={header} footer={footer}>
            <Hero
                title="Build interfaces from dependable parts"
                subtitle="A component library with predictable state and accessible overlays."
                centered={true}
                actions={html! {
                    <>
                        <Button size={Size::Lg} tone={Some(Color::Primary)} onclick={get_started}>
                            {"Get started"}
                        </Button>
                        <Button size={Size::Lg} variant={ButtonVariant::Outline} onclick={learn_more}>
                            {"Learn more"}
                        </Button>
                    </>
                }}
            >
                <div class="mt-4">
                    <Badge tone={Some(Color::Accent)}>{"New: drawer placements"}</Badge>
                </div>
            </Hero>
            <Section title="Features" description="Everything a product surface needs.">
                <Container>
                    <Grid columns={Columns::Three}>
                        {for FEATURES.iter().map(|(icon, title, body)| html! {
                            <Card key={*title} variant={CardVariant::Bordered} title={*title}>
                                <span class={classes!("iconify", *icon, "size-8", "text-primary")} aria-hidden="true"></span>
                                <p class="opacity-80">{*body}</p>
                            </Card>
                        })}
                    </Grid>
                </Container>
            </Section>
            <Section background={Surface::Muted}>
                <Container>
                    <StatsSection title="By the numbers" stats={props.stats.clone()} columns={Columns::Four} />
                </Container>
            </Section>
            <Section>
                <Container>
                    <CtaSection
                        variant={CtaVariant::Banner}
                        title="Ready to ship?"
                        description="Start with the gallery and copy what you need."
                        primary_label="Get started"
                        secondary_label="Read the docs"
                        on_primary={props.on_get_started.clone()}
                        on_secondary={props.on_learn_more.clone()}
                    />
                </Container>
            </Section>
        </PageLayout>
    }
}
