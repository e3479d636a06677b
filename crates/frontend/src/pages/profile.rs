use super::PageShell;
use crate::auth::use_auth;
use quizy_core::View;
use yew::prelude::*;

/// Signed-in user's own profile, built from the token claims
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();

    let Some(claims) = auth.claims.clone() else {
        return html! { <PageShell view={View::Profile} /> };
    };

    let expires = claims
        .expires_at()
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    html! {
        <PageShell view={View::Profile} subtitle={claims.email.clone()}>
            <dl class="grid grid-cols-2 gap-2 text-sm text-gray-700 dark:text-gray-300">
                <dt class="font-medium">{"User ID"}</dt>
                <dd>{claims.user_id.map(|id| id.to_string()).unwrap_or_default()}</dd>
                <dt class="font-medium">{"Session expires"}</dt>
                <dd>{expires}</dd>
            </dl>
        </PageShell>
    }
}
