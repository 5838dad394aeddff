use super::{Story, StoryPage, use_actions, use_fixtures};
use crate::components::atoms::{Button, Input};
use crate::components::molecules::{
    Alert, Breadcrumbs, Card, CheckboxGroup, FileList, FormField, RadioGroup, Stat, Tabs, Timeline,
};
use trellis_core::style::{
    AlertKind, ButtonVariant, CardVariant, FileListVariant, Orientation, Padding, Size, TabsStyle,
};
use yew::prelude::*;

#[function_component(MoleculesStory)]
pub(crate) fn molecules_story() -> Html {
    let actions = use_actions();
    let fixtures = use_fixtures();
    let controlled_plan = use_state_eq(|| String::from("starter"));
    let email = use_state(String::new);

    let on_controlled_plan = {
        let controlled_plan = controlled_plan.clone();
        let log = actions.callback::<String>("RadioGroup.on_change (controlled)");
        Callback::from(move |value: String| {
            log.emit(value.clone());
            controlled_plan.set(value);
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let email_error = (!email.is_empty() && !email.contains('@'))
        .then(|| AttrValue::from("Enter a valid email address."));

    html! {
        <StoryPage title="Molecules" description="Small compositions, including the selection controls.">
            <Story name="RadioGroup (uncontrolled)" note="Seeded by default_value; the group owns its selection.">
                <RadioGroup
                    name="plan-uncontrolled"
                    legend="Plan"
                    options={fixtures.plans.clone()}
                    default_value={Some(String::from("team"))}
                    on_change={actions.callback::<String>("RadioGroup.on_change")}
                />
            </Story>
            <Story name="RadioGroup (controlled)" note="The parent owns the value; the buttons below change it directly.">
                <div class="flex flex-col gap-4">
                    <RadioGroup
                        name="plan-controlled"
                        orientation={Orientation::Horizontal}
                        options={fixtures.plans.clone()}
                        value={Some((*controlled_plan).clone())}
                        on_change={on_controlled_plan}
                    />
                    <div class="flex gap-2">
                        {for fixtures.plans.iter().map(|plan| {
                            let controlled_plan = controlled_plan.clone();
                            let value = plan.value.clone();
                            html! {
                                <Button
                                    key={plan.value.clone()}
                                    size={Size::Xs}
                                    variant={ButtonVariant::Outline}
                                    onclick={Callback::from(move |_: MouseEvent| controlled_plan.set(value.clone()))}
                                >
                                    {format!("Set {}", plan.label)}
                                </Button>
                            }
                        })}
                    </div>
                </div>
            </Story>
            <Story name="CheckboxGroup">
                <CheckboxGroup
                    name="notifications"
                    legend="Notify me about"
                    options={fixtures.notifications.clone()}
                    default_value={Some(vec![String::from("mentions")])}
                    on_change={actions.callback::<Vec<String>>("CheckboxGroup.on_change")}
                />
            </Story>
            <Story name="Tabs">
                <div class="flex flex-col gap-6">
                    {for TabsStyle::ALL.iter().map(|style| html! {
                        <Tabs
                            key={style.as_str()}
                            tabs={fixtures.tabs.clone()}
                            style={*style}
                            default_value={fixtures.tabs.first().map(|tab| tab.value.clone())}
                            on_change={actions.callback::<String>("Tabs.on_change")}
                        />
                    })}
                    <Tabs
                        tabs={fixtures.tabs.clone()}
                        orientation={Orientation::Vertical}
                        default_value={fixtures.tabs.get(1).map(|tab| tab.value.clone())}
                        on_change={actions.callback::<String>("Tabs.on_change (vertical)")}
                    >
                        <p class="opacity-70">{"Panel content for the active tab."}</p>
                    </Tabs>
                </div>
            </Story>
            <Story name="FormField">
                <div class="max-w-md">
                    <FormField
                        label="Email"
                        html_for="story-email"
                        hint="We never share it."
                        error={email_error}
                        required={true}
                    >
                        <Input
                            id="story-email"
                            input_type="email"
                            value={(*email).clone()}
                            invalid={!email.is_empty() && !email.contains('@')}
                            oninput={on_email}
                        />
                    </FormField>
                </div>
            </Story>
            <Story name="Card" note="Variants, plus selectable cards reporting (id, selected).">
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
                    {for CardVariant::ALL.iter().map(|variant| html! {
                        <Card key={variant.as_str()} variant={*variant} title={variant.as_str()} subtitle="Card variant">
                            <p>{"Body content."}</p>
                        </Card>
                    })}
                    {for ["alpha", "beta"].into_iter().map(|id| html! {
                        <Card
                            key={id}
                            id={id}
                            title={format!("Selectable {id}")}
                            padding={Padding::Sm}
                            selectable={true}
                            default_selected={id == "beta"}
                            on_select={actions.callback::<(AttrValue, bool)>("Card.on_select")}
                        >
                            <p class="text-sm">{"Click to toggle."}</p>
                        </Card>
                    })}
                </div>
            </Story>
            <Story name="Stat">
                <div class="stats shadow">
                    {for fixtures.stats.iter().map(|item| html! {
                        <Stat
                            key={item.label.clone()}
                            title={item.label.clone()}
                            value={item.value.clone()}
                            description={item.description.clone().map(AttrValue::from)}
                            trend={item.trend}
                        />
                    })}
                </div>
            </Story>
            <Story name="Alert">
                <div class="flex flex-col gap-3">
                    {for AlertKind::ALL.iter().map(|kind| html! {
                        <Alert
                            key={kind.as_str()}
                            kind={*kind}
                            title={kind.as_str()}
                            description="Dismiss me to see the callback."
                            dismissible={true}
                            on_dismiss={actions.callback::<()>("Alert.on_dismiss")}
                        />
                    })}
                </div>
            </Story>
            <Story name="Timeline">
                <Timeline items={fixtures.timeline.clone()} />
            </Story>
            {for FileListVariant::ALL.iter().map(|variant| html! {
                <Story key={variant.as_str()} name={format!("FileList ({})", variant.as_str())}>
                    <FileList
                        files={fixtures.files.clone()}
                        variant={*variant}
                        selectable={true}
                        removable={true}
                        on_select={actions.callback::<(AttrValue, bool)>("FileList.on_select")}
                        on_remove={actions.callback::<AttrValue>("FileList.on_remove")}
                    />
                </Story>
            })}
            <Story name="FileList (empty)">
                <FileList empty_label="Nothing uploaded yet" />
            </Story>
            <Story name="Breadcrumbs">
                <Breadcrumbs items={fixtures.breadcrumbs.clone()} />
            </Story>
        </StoryPage>
    }
}
