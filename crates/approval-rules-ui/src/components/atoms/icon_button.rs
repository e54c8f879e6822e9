use yew::prelude::*;

/// Props for icon-only buttons such as approver removal.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub(crate) aria_label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!("btn", "btn-ghost", "btn-sm", "btn-square", props.class.clone());
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            title={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
