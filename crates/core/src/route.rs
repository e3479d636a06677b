//! Declarative route records and the views they render

use std::fmt;

/// Views the quiz application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Auth,
    Register,
    CreateTest,
    CreateQuestions,
    Play,
    Quiz,
    Result,
    Profile,
    OtherProfile,
    ShowQuiz,
}

impl View {
    /// Human readable title shown in page headers
    pub fn title(&self) -> &'static str {
        match self {
            View::Auth => "Sign in",
            View::Register => "Create an account",
            View::CreateTest => "Create a quiz",
            View::CreateQuestions => "Questions",
            View::Play => "Play",
            View::Quiz => "Quiz",
            View::Result => "Results",
            View::Profile => "My profile",
            View::OtherProfile => "Profile",
            View::ShowQuiz => "Quiz details",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single entry of the route table.
///
/// `requires_auth` is optional so that children can inherit the requirement
/// of their parent. A child path without a leading `/` is relative to its
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: String,
    pub view: View,
    pub requires_auth: Option<bool>,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
            requires_auth: None,
            name: None,
            alias: None,
            children: Vec::new(),
        }
    }

    /// Mark the route as reachable without a session
    pub fn public(mut self) -> Self {
        self.requires_auth = Some(false);
        self
    }

    /// Mark the route as requiring a session
    pub fn protected(mut self) -> Self {
        self.requires_auth = Some(true);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn child(mut self, child: RouteRecord) -> Self {
        self.children.push(child);
        self
    }
}
