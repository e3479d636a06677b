//! Page shells for each view

mod auth;
mod profile;

pub use auth::AuthPage;
pub use profile::ProfilePage;

use crate::routes::Route;
use quizy_core::View;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub view: View,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Common page frame: title, optional subtitle, content
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <section class="max-w-3xl mx-auto py-8 px-4" data-view={props.view.to_string()}>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{props.view.title()}</h1>
            if let Some(subtitle) = &props.subtitle {
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
            }
            <div class="mt-6">
                {props.children.clone()}
            </div>
        </section>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! {
        <PageShell view={View::Register}>
            <p class="text-gray-600 dark:text-gray-400">
                {"Already have an account? "}
                <Link<Route> to={Route::Auth} classes={classes!("text-blue-600")}>{"Sign in"}</Link<Route>>
            </p>
        </PageShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct CreateTestProps {
    #[prop_or_default]
    pub children: Children,
}

/// Quiz editor frame; nested question editing renders inside it
#[function_component(CreateTestPage)]
pub fn create_test_page(props: &CreateTestProps) -> Html {
    html! {
        <PageShell view={View::CreateTest}>
            <nav class="mb-4">
                <Link<Route> to={Route::CreateQuestions} classes={classes!("text-blue-600")}>
                    {"Edit questions"}
                </Link<Route>>
            </nav>
            {props.children.clone()}
        </PageShell>
    }
}

#[function_component(CreateQuestionsPage)]
pub fn create_questions_page() -> Html {
    html! {
        <PageShell view={View::CreateQuestions} />
    }
}

#[function_component(PlayPage)]
pub fn play_page() -> Html {
    html! {
        <PageShell view={View::Play} subtitle={Some("Pick a quiz to start playing".to_string())} />
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizProps {
    pub quiz_id: String,
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizProps) -> Html {
    html! {
        <PageShell view={View::Quiz} subtitle={Some(format!("Quiz #{}", props.quiz_id))}>
            <Link<Route> to={Route::QuizResult { quiz_id: props.quiz_id.clone() }} classes={classes!("text-blue-600")}>
                {"See results"}
            </Link<Route>>
        </PageShell>
    }
}

#[function_component(ResultPage)]
pub fn result_page(props: &QuizProps) -> Html {
    html! {
        <PageShell view={View::Result} subtitle={Some(format!("Quiz #{}", props.quiz_id))} />
    }
}

#[function_component(ShowQuizPage)]
pub fn show_quiz_page(props: &QuizProps) -> Html {
    html! {
        <PageShell view={View::ShowQuiz} subtitle={Some(format!("Quiz #{}", props.quiz_id))}>
            <Link<Route> to={Route::Quiz { quiz_id: props.quiz_id.clone() }} classes={classes!("text-blue-600")}>
                {"Play this quiz"}
            </Link<Route>>
        </PageShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct OtherProfileProps {
    pub username: String,
}

#[function_component(OtherProfilePage)]
pub fn other_profile_page(props: &OtherProfileProps) -> Html {
    html! {
        <PageShell view={View::OtherProfile} subtitle={Some(format!("@{}", props.username))} />
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="max-w-3xl mx-auto py-8 px-4 text-center">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Page not found"}</h1>
            <Link<Route> to={Route::Play} classes={classes!("mt-4", "inline-block", "text-blue-600")}>
                {"Back to quizzes"}
            </Link<Route>>
        </section>
    }
}
