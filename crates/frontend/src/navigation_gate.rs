//! Navigation gate running the auth guard on every location change

use crate::auth::{BrowserStorage, ContextAuth, use_auth};
use crate::components::LoadingSpinner;
use crate::routes::Route;
use quizy_core::{GuardContext, NavigationConfig, NavigationDecision, NavigationGuard, RouteTable};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

/// What the gate does with the current path
#[derive(Debug, Clone, PartialEq)]
pub enum GateStep {
    Render,
    Replace(Route),
    /// Redirect target with no typed route
    Unroutable(String),
}

/// Run the guard for `path` and translate its decision into a router step
pub fn gate_step(
    guard: &NavigationGuard,
    table: &RouteTable,
    path: &str,
    ctx: &mut GuardContext<'_>,
) -> GateStep {
    match guard.check(&table.resolve(path), ctx) {
        NavigationDecision::Proceed => GateStep::Render,
        NavigationDecision::Redirect(target) => match Route::recognize(&target) {
            Some(route) => GateStep::Replace(route),
            None => GateStep::Unroutable(target),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationGateProps {
    pub config: NavigationConfig,
    pub children: Children,
}

/// Renders children only once the current path has passed the guard
#[function_component(NavigationGate)]
pub fn navigation_gate(props: &NavigationGateProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let table = use_memo((), |_| RouteTable::quiz_routes());
    let guard = use_memo(props.config.clone(), NavigationConfig::guard);
    let cleared = use_state(|| None::<String>);

    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let cleared = cleared.clone();
        let auth = auth.clone();
        use_effect_with(
            (path.clone(), auth.is_logged_in, auth.is_loading),
            move |(path, _, is_loading)| {
                if *is_loading {
                    return;
                }

                let storage = BrowserStorage;
                let mut session = ContextAuth::new(auth);
                let mut ctx = GuardContext::new(&mut session, &storage);

                match gate_step(&guard, &table, path, &mut ctx) {
                    GateStep::Render => cleared.set(Some(path.clone())),
                    GateStep::Replace(route) => {
                        cleared.set(None);
                        match navigator {
                            Some(navigator) => navigator.replace(&route),
                            None => warn!(route = %route.to_path(), "No router to redirect with"),
                        }
                    }
                    GateStep::Unroutable(target) => {
                        cleared.set(None);
                        warn!(target = %target, "Cannot redirect outside the router");
                    }
                }
            },
        );
    }

    if auth.is_loading || cleared.as_deref() != Some(path.as_str()) {
        return html! {
            <LoadingSpinner label={AttrValue::from("Checking your session...")} />
        };
    }

    html! { <>{ props.children.clone() }</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use quizy_core::testing::{MemoryAuth, MemoryStorage};

    fn step(path: &str, auth: &mut MemoryAuth, storage: &MemoryStorage) -> GateStep {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut ctx = GuardContext::new(auth, storage).at(now);
        gate_step(
            &NavigationGuard::default(),
            &RouteTable::quiz_routes(),
            path,
            &mut ctx,
        )
    }

    #[test]
    fn test_public_path_renders() {
        let mut auth = MemoryAuth::default();

        assert_eq!(step("/play", &mut auth, &MemoryStorage::default()), GateStep::Render);
    }

    #[test]
    fn test_missing_session_replaces_with_login() {
        let mut auth = MemoryAuth::default();

        assert_eq!(
            step("/profile/me", &mut auth, &MemoryStorage::default()),
            GateStep::Replace(Route::Auth)
        );
    }

    #[test]
    fn test_expired_token_logs_out_and_replaces() {
        let mut auth = MemoryAuth::logged_in();
        let expired = Utc.timestamp_opt(1_700_000_000, 0).unwrap() - Duration::minutes(5);
        let storage = MemoryStorage::with_token("token", expired);

        assert_eq!(
            step("/quiz/4", &mut auth, &storage),
            GateStep::Replace(Route::Auth)
        );
        assert_eq!(auth.logouts, 1);
        assert!(!auth.logged_in);
    }

    #[test]
    fn test_valid_session_renders() {
        let mut auth = MemoryAuth::logged_in();
        let expiry = Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::hours(2);
        let storage = MemoryStorage::with_token("token", expiry);

        assert_eq!(step("/create-test/questions", &mut auth, &storage), GateStep::Render);
        assert_eq!(auth.logouts, 0);
    }
}
