//! Application root: preferences, translation context, page shell and toasts.

use crate::components::shell::PageShell;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, app_dispatch, dismiss_toast};
use crate::features::rules::view::RuleEditor;
use crate::i18n::TranslationBundle;
use preferences::{apply_locale, apply_theme, load_config};
use yew::prelude::*;
use yewdux::prelude::use_selector;

mod preferences;

#[function_component(ApprovalRulesApp)]
pub(crate) fn approval_rules_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let bundle = {
        let locale = config.locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());

    {
        let theme = config.theme;
        let locale = config.locale;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                apply_locale(locale);
                || ()
            },
            (theme, locale),
        );
    }

    let on_dismiss = {
        let dispatch = app_dispatch();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| dismiss_toast(&mut store.toasts, id));
        })
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <PageShell>
                <RuleEditor />
            </PageShell>
            <ToastHost
                toasts={(*toasts).clone()}
                on_dismiss={on_dismiss}
                timeout_ms={config.toast_timeout_ms}
            />
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the app on `#root`, or on the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ApprovalRulesApp>::with_root(root).render();
    } else {
        yew::Renderer::<ApprovalRulesApp>::new().render();
    }
}
