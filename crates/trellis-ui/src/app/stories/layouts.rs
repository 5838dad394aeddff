use super::{Story, StoryPage};
use crate::components::templates::{Container, Grid, PageLayout, Section, Stack};
use trellis_core::style::{Columns, ContainerWidth, Orientation, Padding, Surface};
use yew::prelude::*;

fn placeholder(label: String) -> Html {
    html! {
        <div class="rounded-box bg-primary/10 p-4 text-center text-sm font-medium">{label}</div>
    }
}

#[function_component(LayoutsStory)]
pub(crate) fn layouts_story() -> Html {
    html! {
        <StoryPage title="Layouts" description="Stateless wrappers for spacing and structure.">
            <Story name="Container" note="Maximum widths from sm to full.">
                <div class="flex flex-col gap-2">
                    {for ContainerWidth::ALL.iter().map(|width| html! {
                        <Container key={width.as_str()} width={*width} class="bg-base-200 rounded-box">
                            {placeholder(format!("width {}", width.as_str()))}
                        </Container>
                    })}
                </div>
            </Story>
            <Story name="Section">
                <div class="flex flex-col gap-2">
                    {for Surface::ALL.iter().map(|surface| html! {
                        <Section
                            key={surface.as_str()}
                            background={*surface}
                            padding={Padding::Sm}
                            title={format!("{} surface", surface.as_str())}
                        >
                            <Container>{placeholder(String::from("content"))}</Container>
                        </Section>
                    })}
                </div>
            </Story>
            <Story name="Grid">
                <div class="flex flex-col gap-6">
                    {for Columns::ALL.iter().map(|columns| html! {
                        <Grid key={columns.as_str()} columns={*columns} gap={Padding::Sm}>
                            {for (1..=6).map(|cell| placeholder(format!("{} col / {cell}", columns.as_str())))}
                        </Grid>
                    })}
                </div>
            </Story>
            <Story name="Stack">
                <div class="flex flex-col gap-6">
                    {for Orientation::ALL.iter().map(|direction| html! {
                        <Stack key={direction.as_str()} direction={*direction} gap={Padding::Md}>
                            {for (1..=3).map(|item| placeholder(format!("{} {item}", direction.as_str())))}
                        </Stack>
                    })}
                </div>
            </Story>
            <Story name="PageLayout">
                <div class="h-96 overflow-hidden rounded-box border border-base-300">
                    <PageLayout
                        class="min-h-0 h-full"
                        header={placeholder(String::from("header"))}
                        sidebar={placeholder(String::from("sidebar"))}
                        footer={placeholder(String::from("footer"))}
                    >
                        <div class="p-4">{placeholder(String::from("main"))}</div>
                    </PageLayout>
                </div>
            </Story>
        </StoryPage>
    }
}
