//! Sign-in page

use super::PageShell;
use crate::auth::{AuthAction, use_auth};
use crate::routes::Route;
use quizy_core::View;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let token = use_state(String::new);

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            token.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let token = token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !token.trim().is_empty() {
                auth.dispatch(AuthAction::Login((*token).clone()));
            }
        })
    };

    // Leave the sign-in page once a session exists
    {
        let token = token.clone();
        use_effect_with(auth.is_logged_in, move |logged_in| {
            if *logged_in && let Some(navigator) = navigator {
                token.set(String::new());
                navigator.push(&Route::Profile);
            }
        });
    }

    html! {
        <PageShell view={View::Auth} subtitle={Some("Paste the token issued by the quiz service".to_string())}>
            <form class="space-y-4" onsubmit={on_submit}>
                <textarea
                    class="w-full h-32 px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg font-mono text-sm"
                    placeholder="eyJhbGciOi..."
                    value={(*token).clone()}
                    oninput={on_token_input}
                />
                if let Some(error) = &auth.error {
                    <div class="p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                        {error}
                    </div>
                }
                <button
                    type="submit"
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium py-3 px-4 rounded-lg"
                    disabled={token.trim().is_empty()}
                >
                    {"Sign in"}
                </button>
            </form>
            <p class="mt-4 text-sm text-gray-600 dark:text-gray-400">
                {"New here? "}
                <Link<Route> to={Route::Register} classes={classes!("text-blue-600")}>{"Create an account"}</Link<Route>>
            </p>
        </PageShell>
    }
}
