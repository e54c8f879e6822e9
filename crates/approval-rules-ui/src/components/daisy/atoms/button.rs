use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or(DaisyVariant::Solid)]
    pub(crate) variant: DaisyVariant,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let tone = tone_class("btn", props.tone);
    let size = props.size.with_prefix("btn");
    let mut classes = classes!("btn", props.variant.as_class(), size, props.class.clone());
    if let Some(tone) = tone {
        classes.push(tone);
    }

    html! {
        <button class={classes} type="button" onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}
