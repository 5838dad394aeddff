use super::{Story, StoryPage, use_actions, use_fixtures};
use crate::components::atoms::{
    Avatar, Badge, Button, Checkbox, Divider, Input, Loading, Radio, Select, Textarea, Toggle,
};
use trellis_core::style::{
    AvatarShape, BadgeVariant, ButtonVariant, Color, LoadingKind, Orientation, Size,
};
use yew::prelude::*;

#[function_component(AtomsStory)]
pub(crate) fn atoms_story() -> Html {
    let actions = use_actions();
    let fixtures = use_fixtures();
    let text = use_state(String::new);
    let notes = use_state(String::new);
    let agreed = use_state_eq(|| false);
    let notify = use_state_eq(|| true);
    let flavour = use_state_eq(|| AttrValue::from("vanilla"));

    let on_text = {
        let text = text.clone();
        let log = actions.callback::<String>("Input.oninput");
        Callback::from(move |value: String| {
            log.emit(value.clone());
            text.set(value);
        })
    };
    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |value: String| notes.set(value))
    };
    let on_agree = {
        let agreed = agreed.clone();
        let log = actions.callback::<bool>("Checkbox.onchange");
        Callback::from(move |value: bool| {
            log.emit(value);
            agreed.set(value);
        })
    };
    let on_notify = {
        let notify = notify.clone();
        let log = actions.callback::<bool>("Toggle.onchange");
        Callback::from(move |value: bool| {
            log.emit(value);
            notify.set(value);
        })
    };
    let on_flavour = {
        let flavour = flavour.clone();
        let log = actions.callback::<AttrValue>("Radio.onselect");
        Callback::from(move |value: AttrValue| {
            log.emit(value.clone());
            flavour.set(value);
        })
    };

    html! {
        <StoryPage title="Atoms" description="Single-purpose controls and indicators.">
            <Story name="Button" note="Variants, sizes, colors, loading and block layout.">
                <div class="flex flex-col gap-4">
                    <div class="flex flex-wrap gap-2">
                        {for ButtonVariant::ALL.iter().map(|&variant| {
                            let onclick = actions
                                .callback::<&'static str>("Button.onclick")
                                .reform(move |_: MouseEvent| variant.as_str());
                            html! {
                                <Button
                                    key={variant.as_str()}
                                    variant={variant}
                                    tone={Some(Color::Primary)}
                                    onclick={onclick}
                                >
                                    {variant.as_str()}
                                </Button>
                            }
                        })}
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        {for Size::ALL.iter().map(|size| html! {
                            <Button key={size.as_str()} size={*size}>{size.as_str()}</Button>
                        })}
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {for Color::ALL.iter().map(|color| html! {
                            <Button key={color.as_str()} tone={Some(*color)}>{color.as_str()}</Button>
                        })}
                    </div>
                    <div class="flex flex-wrap gap-2">
                        <Button loading={true}>{"Saving"}</Button>
                        <Button disabled={true}>{"Disabled"}</Button>
                    </div>
                    <Button block={true} variant={ButtonVariant::Soft}>{"Block"}</Button>
                </div>
            </Story>
            <Story name="Badge">
                <div class="flex flex-wrap gap-2">
                    {for BadgeVariant::ALL.iter().map(|variant| html! {
                        <Badge key={variant.as_str()} variant={*variant} tone={Some(Color::Secondary)}>
                            {variant.as_str()}
                        </Badge>
                    })}
                    <Badge size={Size::Lg}>{"large"}</Badge>
                </div>
            </Story>
            <Story name="Input and Textarea">
                <div class="flex max-w-md flex-col gap-3">
                    <Input value={(*text).clone()} placeholder="Type something" oninput={on_text} />
                    <Input placeholder="Invalid" invalid={true} />
                    <Textarea value={(*notes).clone()} placeholder="Notes" oninput={on_notes} />
                    <p class="text-sm opacity-70">{format!("{} characters of notes", notes.chars().count())}</p>
                </div>
            </Story>
            <Story name="Checkbox, Radio and Toggle">
                <div class="flex flex-col gap-3">
                    <Checkbox
                        label="I agree to the terms"
                        description="Required before continuing."
                        checked={*agreed}
                        onchange={on_agree}
                    />
                    <Toggle label="Email notifications" checked={*notify} tone={Some(Color::Success)} onchange={on_notify} />
                    <div class="flex gap-4">
                        {for ["vanilla", "chocolate", "strawberry"].into_iter().map(|value| html! {
                            <Radio
                                key={value}
                                name="flavour"
                                value={value}
                                label={value}
                                checked={flavour.as_str() == value}
                                onselect={on_flavour.clone()}
                            />
                        })}
                    </div>
                </div>
            </Story>
            <Story name="Select" note="Uncontrolled, seeded with a default value.">
                <Select
                    class="max-w-xs"
                    options={fixtures.plans.clone()}
                    default_value={Some(String::from("team"))}
                    placeholder="Pick a plan"
                    on_change={actions.callback::<String>("Select.on_change")}
                />
            </Story>
            <Story name="Avatar">
                <div class="flex items-end gap-4">
                    {for AvatarShape::ALL.iter().map(|shape| html! {
                        <Avatar key={shape.as_str()} shape={*shape} initials="TR" />
                    })}
                    {for Size::ALL.iter().map(|size| html! {
                        <Avatar key={size.as_str()} size={*size} initials={size.as_str().to_uppercase()} />
                    })}
                </div>
            </Story>
            <Story name="Divider">
                <div class="flex flex-col">
                    <span>{"Above"}</span>
                    <Divider label="or" />
                    <span>{"Below"}</span>
                </div>
                <div class="flex h-16">
                    <span>{"Left"}</span>
                    <Divider orientation={Orientation::Horizontal} />
                    <span>{"Right"}</span>
                </div>
            </Story>
            <Story name="Loading">
                <div class="flex items-center gap-4">
                    {for LoadingKind::ALL.iter().map(|kind| html! {
                        <Loading key={kind.as_str()} kind={*kind} />
                    })}
                    <Loading size={Size::Lg} />
                </div>
            </Story>
        </StoryPage>
    }
}
