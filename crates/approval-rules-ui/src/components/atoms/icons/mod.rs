//! Inline SVG icons (Lucide outlines) used by the shell and editor.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconShield)]
pub(crate) fn icon_shield(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" /> },
    )
}

#[function_component(IconPlus)]
pub(crate) fn icon_plus(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12h14m-7-7v14" /> })
}

#[function_component(IconX)]
pub(crate) fn icon_x(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M18 6L6 18M6 6l12 12" /> })
}
