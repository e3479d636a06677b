//! Typed routes for the browser router

use crate::pages::{
    AuthPage, CreateQuestionsPage, CreateTestPage, NotFoundPage, OtherProfilePage, PlayPage,
    ProfilePage, QuizPage, RegisterPage, ResultPage, ShowQuizPage,
};
use quizy_core::View;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/auth")]
    Auth,
    #[at("/register")]
    Register,
    #[at("/create-test")]
    CreateTest,
    #[at("/create-test/questions")]
    CreateQuestions,
    #[at("/play")]
    Play,
    #[at("/")]
    Home,
    #[at("/play/:quiz_id")]
    Quiz { quiz_id: String },
    #[at("/play/:quiz_id/result")]
    QuizResult { quiz_id: String },
    #[at("/profile/me")]
    Profile,
    #[at("/profile/:username")]
    OtherProfile { username: String },
    #[at("/quiz/:quiz_id")]
    ShowQuiz { quiz_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Views rendered for this route, outermost first
    pub fn views(&self) -> Vec<View> {
        match self {
            Route::Auth => vec![View::Auth],
            Route::Register => vec![View::Register],
            Route::CreateTest => vec![View::CreateTest],
            Route::CreateQuestions => vec![View::CreateTest, View::CreateQuestions],
            Route::Play | Route::Home => vec![View::Play],
            Route::Quiz { .. } => vec![View::Quiz],
            Route::QuizResult { .. } => vec![View::Result],
            Route::Profile => vec![View::Profile],
            Route::OtherProfile { .. } => vec![View::OtherProfile],
            Route::ShowQuiz { .. } => vec![View::ShowQuiz],
            Route::NotFound => Vec::new(),
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Auth => html! { <AuthPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::CreateTest => html! { <CreateTestPage /> },
        Route::CreateQuestions => html! {
            <CreateTestPage>
                <CreateQuestionsPage />
            </CreateTestPage>
        },
        Route::Play | Route::Home => html! { <PlayPage /> },
        Route::Quiz { quiz_id } => html! { <QuizPage {quiz_id} /> },
        Route::QuizResult { quiz_id } => html! { <ResultPage {quiz_id} /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::OtherProfile { username } => html! { <OtherProfilePage {username} /> },
        Route::ShowQuiz { quiz_id } => html! { <ShowQuizPage {quiz_id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizy_core::RouteTable;

    fn sample(pattern: &str) -> String {
        pattern
            .split('/')
            .map(|part| if part.starts_with(':') { "sample" } else { part })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn test_routes_match_core_table() {
        let table = RouteTable::quiz_routes();

        for pattern in table.patterns() {
            let path = sample(pattern);
            let route = Route::recognize(&path)
                .unwrap_or_else(|| panic!("no typed route for {path}"));

            assert_eq!(route.views(), table.resolve(&path).matched, "{path}");
        }
    }

    #[test]
    fn test_params_are_captured() {
        assert_eq!(
            Route::recognize("/play/12/result"),
            Some(Route::QuizResult {
                quiz_id: "12".to_string()
            })
        );
        assert_eq!(Route::recognize("/profile/me"), Some(Route::Profile));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn test_login_path_is_routable() {
        let login = quizy_core::NavigationGuard::default();
        assert_eq!(Route::recognize(login.login_path()), Some(Route::Auth));
        assert_eq!(Route::Auth.to_path(), "/auth");
    }
}
