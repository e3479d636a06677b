use crate::auth::AuthProvider;
use crate::components::NavBar;
use crate::navigation_gate::NavigationGate;
use crate::routes::{Route, switch};
use quizy_core::NavigationConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: NavigationConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider token_key={props.config.token_storage_key.clone()}>
                <div class="min-h-screen bg-gray-50 dark:bg-gray-800">
                    <NavBar />
                    <main>
                        <NavigationGate config={props.config.clone()}>
                            <Switch<Route> render={switch} />
                        </NavigationGate>
                    </main>
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}
