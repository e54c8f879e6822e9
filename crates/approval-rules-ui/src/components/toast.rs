use crate::core::store::ToastTimers;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::Toast;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) on_dismiss: Callback<u64>,
    /// Auto-dismiss delay per toast.
    pub(crate) timeout_ms: u32,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    let timers = use_mut_ref(ToastTimers::<Timeout>::default);
    {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                timers.borrow_mut().sync(list, |id| {
                    let on_dismiss = on_dismiss.clone();
                    Timeout::new(timeout_ms, move || on_dismiss.emit(id))
                });
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone(), &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>, dismiss_label: &str) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div key={id.to_string()} class={classes!("alert", format!("alert-{}", toast.kind.as_class()))} role="status">
            <div>
                <p class="font-semibold">{toast.title.clone()}</p>
                <p class="text-sm">{toast.description.clone()}</p>
            </div>
            <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
