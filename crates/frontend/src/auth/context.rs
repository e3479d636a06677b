//! Global authentication context and provider

use super::session;
use super::storage::BrowserStorage;
use chrono::Utc;
use quizy_core::Claims;
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub is_logged_in: bool,
    pub claims: Option<Claims>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Storage key of the session token
    pub token_key: String,
}

/// Authentication context actions
pub enum AuthAction {
    /// Store a freshly issued token and start the session
    Login(String),
    Logout,
    /// Restore the session from the stored token
    Restore,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl AuthContextData {
    pub fn new(token_key: impl Into<String>) -> Self {
        Self {
            is_logged_in: false,
            claims: None,
            // Start with loading until the stored token has been checked
            is_loading: true,
            error: None,
            token_key: token_key.into(),
        }
    }

    fn signed_in(&self, claims: Claims) -> Self {
        Self {
            is_logged_in: true,
            claims: Some(claims),
            is_loading: false,
            error: None,
            token_key: self.token_key.clone(),
        }
    }

    fn signed_out(&self, error: Option<String>) -> Self {
        Self {
            is_logged_in: false,
            claims: None,
            is_loading: false,
            error,
            token_key: self.token_key.clone(),
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut storage = BrowserStorage;

        match action {
            AuthAction::Login(token) => {
                match session::login(&mut storage, &self.token_key, &token, Utc::now()) {
                    Ok(claims) => Rc::new(self.signed_in(claims)),
                    Err(err) => Rc::new(self.signed_out(Some(err.to_string()))),
                }
            }
            AuthAction::Logout => {
                session::logout(&mut storage, &self.token_key);
                Rc::new(self.signed_out(None))
            }
            AuthAction::Restore => match session::restore(&mut storage, &self.token_key, Utc::now()) {
                Some(claims) => Rc::new(self.signed_in(claims)),
                None => Rc::new(self.signed_out(None)),
            },
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub token_key: String,
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = {
        let token_key = props.token_key.clone();
        use_reducer(move || AuthContextData::new(token_key))
    };

    // Load auth state from localStorage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            auth_state.dispatch(AuthAction::Restore);
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
