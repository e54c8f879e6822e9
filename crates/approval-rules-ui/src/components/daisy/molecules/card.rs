use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let classes = classes!("card", "shadow", "bg-base-100", "border", "border-base-300", props.class.clone());
    html! {
        <div class={classes}>
            {(props.title.is_some() || props.subtitle.is_some()).then(|| {
                html! {
                    <div class="card-title px-6 pt-6">
                        <div>
                            {props.title.clone().map(|title| html! { <h3 class="text-lg font-bold">{title}</h3> }).unwrap_or_default()}
                            {props.subtitle.clone().map(|subtitle| html! { <p class="text-sm font-normal opacity-70">{subtitle}</p> }).unwrap_or_default()}
                        </div>
                    </div>
                }
            }).unwrap_or_default()}
            <div class="card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}
