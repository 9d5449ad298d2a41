/// Popup UI: one button that clears the active site's data

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::background::handle_popup_click;
use crate::chrome::ChromeTabs;
use crate::handler::{resolve_active_target, ClickOutcome};

#[derive(Clone, PartialEq)]
enum PopupState {
    Idle,
    Running,
    Done(ClickOutcome),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Idle);
    let site = use_state(|| None::<String>);

    // Show which site the button will clear
    {
        let site = site.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(target) = resolve_active_target(&ChromeTabs).await {
                    site.set(Some(target.host));
                }
            });
            || ()
        });
    }

    let on_clear = {
        let state = state.clone();

        Callback::from(move |_| {
            let state = state.clone();

            // Disabled until the run settles, whatever the outcome
            state.set(PopupState::Running);

            spawn_local(async move {
                let outcome = handle_popup_click().await;
                state.set(PopupState::Done(outcome));
            });
        })
    };

    let is_busy = matches!(*state, PopupState::Running);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Origin Cleaner"}</h1>

            <p class="site-host">
                {match &*site {
                    Some(host) => host.clone(),
                    None => "No web page active".to_string(),
                }}
            </p>

            <Button onclick={on_clear} disabled={is_busy || site.is_none()} variant={ButtonVariant::Danger} block={true}>
                {"Clear site data"}
            </Button>

            // Status display
            {match &*state {
                PopupState::Running => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Clearing..."}</p>
                    </div>
                },
                PopupState::Done(outcome) => {
                    let alert_type = match outcome {
                        ClickOutcome::Cleared(_) => AlertType::Success,
                        ClickOutcome::Nothing => AlertType::Info,
                        ClickOutcome::Busy => AlertType::Warning,
                        ClickOutcome::NoTarget => AlertType::Danger,
                    };
                    html! {
                        <div class="message-top-margin">
                            <Alert r#type={alert_type} title={outcome.message()} inline={true}>
                            </Alert>
                        </div>
                    }
                },
                PopupState::Idle => html! {}
            }}

            <p class="footer-popup">
                {"Origin Cleaner v0.1.0"}
            </p>
        </div>
    }
}
