use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    pub(crate) id: AttrValue,
    #[prop_or_default]
    pub(crate) checked: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<bool>,
    /// Label content rendered after the box.
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="label cursor-pointer justify-start gap-3" for={props.id.clone()}>
            <input
                id={props.id.clone()}
                type="checkbox"
                class={classes!("checkbox", props.class.clone())}
                checked={props.checked}
                onchange={onchange}
            />
            <span class="label-text text-sm font-medium">{ for props.children.iter() }</span>
        </label>
    }
}
