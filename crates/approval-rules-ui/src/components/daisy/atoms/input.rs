use crate::components::daisy::foundations::{DaisySize, control_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    #[prop_or_default]
    pub(crate) value: AttrValue,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) input_type: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) min: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) max: Option<AttrValue>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) oninput: Callback<String>,
    /// Receives the `key` of each key press.
    #[prop_or_default]
    pub(crate) onkeydown: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let onkeydown = {
        let onkeydown = props.onkeydown.clone();
        Callback::from(move |event: KeyboardEvent| onkeydown.emit(event.key()))
    };
    html! {
        <input
            class={control_classes("input", props.size, None, &props.class)}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            min={props.min.clone()}
            max={props.max.clone()}
            oninput={oninput}
            onkeydown={onkeydown}
        />
    }
}
