use crate::components::daisy::foundations::{DaisyColor, DaisySize, control_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={control_classes("badge", props.size, props.tone, &props.class)}>
            { for props.children.iter() }
        </span>
    }
}
