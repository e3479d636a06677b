//! Top navigation bar

use crate::auth::{AuthAction, use_auth};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Auth);
            }
        })
    };

    let link = classes!("text-sm", "text-gray-600", "dark:text-gray-400", "hover:text-gray-900");

    html! {
        <nav class="bg-white dark:bg-gray-900 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-5xl mx-auto px-4 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Play} classes={classes!("text-xl", "font-bold", "text-blue-600")}>
                    {"Eazy Quizy"}
                </Link<Route>>
                <div class="flex items-center gap-4">
                    <Link<Route> to={Route::Play} classes={link.clone()}>{"Play"}</Link<Route>>
                    <Link<Route> to={Route::CreateTest} classes={link.clone()}>{"Create"}</Link<Route>>
                    if auth.is_logged_in {
                        <Link<Route> to={Route::Profile} classes={link.clone()}>
                            {auth.claims.as_ref().and_then(|claims| claims.email.clone()).unwrap_or_else(|| "Profile".to_string())}
                        </Link<Route>>
                        <button onclick={on_logout} class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900">
                            {"Sign out"}
                        </button>
                    } else {
                        <Link<Route> to={Route::Auth} classes={link}>{"Sign in"}</Link<Route>>
                    }
                </div>
            </div>
        </nav>
    }
}
