//! Route table compilation and URL resolution

use crate::error::{NavigationError, Result};
use crate::route::{RouteRecord, View};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A route record flattened to its absolute path
#[derive(Debug, Clone)]
struct CompiledRoute {
    pattern: String,
    segments: Vec<Segment>,
    matched: Vec<View>,
    requires_auth: Option<bool>,
    name: Option<String>,
    is_alias: bool,
}

impl CompiledRoute {
    /// Match path segments, returning the captured params
    fn capture(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if text != *part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = urlencoding::decode(part)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| (*part).to_string());
                    params.insert(name.clone(), value);
                }
            }
        }
        Some(params)
    }

    /// Static segments rank above params, position by position
    fn rank(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(_) => 1,
                Segment::Param(_) => 0,
            })
            .collect()
    }
}

/// The outcome of resolving a URL against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Normalized path without query or fragment
    pub path: String,
    /// Path as requested, including query and fragment
    pub full_path: String,
    pub query: Option<String>,
    pub name: Option<String>,
    /// Matched views, outermost first
    pub matched: Vec<View>,
    pub params: BTreeMap<String, String>,
    /// Effective requirement after merging parent metadata
    pub requires_auth: Option<bool>,
}

impl Location {
    /// The innermost matched view
    pub fn view(&self) -> Option<View> {
        self.matched.last().copied()
    }

    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }

    /// True only when the route explicitly opts out of authentication
    pub fn is_public(&self) -> bool {
        self.requires_auth == Some(false)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Static mapping from paths to views
#[derive(Debug, Clone)]
pub struct RouteTable {
    compiled: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        let mut compiled = Vec::new();
        for record in &records {
            compile(record, "", &[], None, &mut compiled);
        }
        Self { compiled }
    }

    /// The routes of the quiz application
    pub fn quiz_routes() -> Self {
        Self::new(vec![
            RouteRecord::new("/auth", View::Auth).public(),
            RouteRecord::new("/register", View::Register).public(),
            RouteRecord::new("/create-test", View::CreateTest)
                .protected()
                .child(RouteRecord::new("questions", View::CreateQuestions)),
            RouteRecord::new("/play", View::Play).public().alias("/"),
            RouteRecord::new("/play/:quiz_id", View::Quiz).public(),
            RouteRecord::new("/play/:quiz_id/result", View::Result)
                .public()
                .named("QuizResult"),
            RouteRecord::new("/profile/me", View::Profile)
                .protected()
                .named("Profile"),
            RouteRecord::new("/profile/:username", View::OtherProfile)
                .protected()
                .named("OtherProfile"),
            RouteRecord::new("/quiz/:quiz_id", View::ShowQuiz)
                .protected()
                .named("ShowQuiz"),
        ])
    }

    /// Absolute path patterns, aliases included
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.compiled.iter().map(|route| route.pattern.as_str())
    }

    /// Resolve a URL to a location. Unmatched URLs yield an empty match.
    pub fn resolve(&self, url: &str) -> Location {
        let (without_fragment, _) = url.split_once('#').unwrap_or((url, ""));
        let (raw_path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (without_fragment, None),
        };

        let parts: Vec<&str> = raw_path.split('/').filter(|part| !part.is_empty()).collect();
        let path = format!("/{}", parts.join("/"));

        let best = self
            .compiled
            .iter()
            .filter_map(|route| route.capture(&parts).map(|params| (route, params)))
            .fold(None::<(&CompiledRoute, BTreeMap<String, String>)>, |best, candidate| {
                match best {
                    Some(current) if current.0.rank() >= candidate.0.rank() => Some(current),
                    _ => Some(candidate),
                }
            });

        match best {
            Some((route, params)) => {
                trace!(url, pattern = %route.pattern, "Resolved route");
                Location {
                    path,
                    full_path: url.to_string(),
                    query,
                    name: route.name.clone(),
                    matched: route.matched.clone(),
                    params,
                    requires_auth: route.requires_auth,
                }
            }
            None => {
                trace!(url, "No route matched");
                Location {
                    path,
                    full_path: url.to_string(),
                    query,
                    name: None,
                    matched: Vec::new(),
                    params: BTreeMap::new(),
                    requires_auth: None,
                }
            }
        }
    }

    /// Build and resolve the location of a named route
    pub fn resolve_named(&self, name: &str, params: &[(&str, &str)]) -> Result<Location> {
        let route = self
            .compiled
            .iter()
            .find(|route| !route.is_alias && route.name.as_deref() == Some(name))
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        let mut parts = Vec::with_capacity(route.segments.len());
        for segment in &route.segments {
            match segment {
                Segment::Static(text) => parts.push(text.clone()),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == param.as_str())
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| NavigationError::missing_param(name, param.as_str()))?;
                    parts.push(urlencoding::encode(value).into_owned());
                }
            }
        }

        Ok(self.resolve(&format!("/{}", parts.join("/"))))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::quiz_routes()
    }
}

fn compile(
    record: &RouteRecord,
    parent_path: &str,
    parent_views: &[View],
    inherited: Option<bool>,
    out: &mut Vec<CompiledRoute>,
) {
    let pattern = join_path(parent_path, &record.path);
    let mut matched = parent_views.to_vec();
    matched.push(record.view);
    let requires_auth = record.requires_auth.or(inherited);

    out.push(CompiledRoute {
        segments: parse_segments(&pattern),
        pattern: pattern.clone(),
        matched: matched.clone(),
        requires_auth,
        name: record.name.clone(),
        is_alias: false,
    });

    if let Some(alias) = &record.alias {
        let alias_pattern = join_path(parent_path, alias);
        out.push(CompiledRoute {
            segments: parse_segments(&alias_pattern),
            pattern: alias_pattern,
            matched: matched.clone(),
            requires_auth,
            name: record.name.clone(),
            is_alias: true,
        });
    }

    for child in &record.children {
        compile(child, &pattern, &matched, requires_auth, out);
    }
}

fn join_path(parent: &str, path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if path.is_empty() {
        return if parent.is_empty() { "/".to_string() } else { parent.to_string() };
    }
    format!("{parent}/{path}")
}

fn parse_segments(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(part.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_route() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/auth");

        assert_eq!(location.view(), Some(View::Auth));
        assert!(location.is_public());
        assert!(location.params.is_empty());
    }

    #[test]
    fn test_resolve_alias_to_play() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/");

        assert_eq!(location.path, "/");
        assert_eq!(location.view(), Some(View::Play));
        assert!(location.is_public());
    }

    #[test]
    fn test_resolve_params() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/play/42/result");

        assert_eq!(location.view(), Some(View::Result));
        assert_eq!(location.name.as_deref(), Some("QuizResult"));
        assert_eq!(location.param("quiz_id"), Some("42"));
    }

    #[test]
    fn test_static_segment_beats_param() {
        let table = RouteTable::quiz_routes();

        let me = table.resolve("/profile/me");
        assert_eq!(me.view(), Some(View::Profile));
        assert!(me.params.is_empty());

        let other = table.resolve("/profile/alice");
        assert_eq!(other.view(), Some(View::OtherProfile));
        assert_eq!(other.param("username"), Some("alice"));
    }

    #[test]
    fn test_child_route_inherits_requirement() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/create-test/questions");

        assert_eq!(location.matched, vec![View::CreateTest, View::CreateQuestions]);
        assert_eq!(location.requires_auth, Some(true));
    }

    #[test]
    fn test_query_fragment_and_trailing_slash() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/quiz/7/?tab=stats#top");

        assert_eq!(location.path, "/quiz/7");
        assert_eq!(location.full_path, "/quiz/7/?tab=stats#top");
        assert_eq!(location.query.as_deref(), Some("tab=stats"));
        assert_eq!(location.view(), Some(View::ShowQuiz));
    }

    #[test]
    fn test_percent_encoded_param_is_decoded() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/profile/jane%20doe");

        assert_eq!(location.param("username"), Some("jane doe"));
    }

    #[test]
    fn test_unmatched_path() {
        let table = RouteTable::quiz_routes();
        let location = table.resolve("/nowhere/at/all");

        assert!(!location.is_matched());
        assert_eq!(location.requires_auth, None);
        assert!(!location.is_public());
    }

    #[test]
    fn test_resolve_named_builds_path() {
        let table = RouteTable::quiz_routes();
        let location = table
            .resolve_named("OtherProfile", &[("username", "jane doe")])
            .unwrap();

        assert_eq!(location.path, "/profile/jane%20doe");
        assert_eq!(location.param("username"), Some("jane doe"));
    }

    #[test]
    fn test_resolve_named_errors() {
        let table = RouteTable::quiz_routes();

        assert_eq!(
            table.resolve_named("Missing", &[]),
            Err(NavigationError::UnknownRoute("Missing".to_string()))
        );
        assert_eq!(
            table.resolve_named("ShowQuiz", &[("quiz_id", "")]),
            Err(NavigationError::missing_param("ShowQuiz", "quiz_id"))
        );
    }

    #[test]
    fn test_patterns_include_children_and_aliases() {
        let table = RouteTable::quiz_routes();
        let patterns: Vec<&str> = table.patterns().collect();

        assert!(patterns.contains(&"/create-test/questions"));
        assert!(patterns.contains(&"/"));
        assert_eq!(patterns.len(), 11);
    }

    #[test]
    fn test_route_names_are_unique() {
        let table = RouteTable::quiz_routes();
        let mut names: Vec<&str> = table
            .compiled
            .iter()
            .filter(|route| !route.is_alias)
            .filter_map(|route| route.name.as_deref())
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/create-test", "questions"), "/create-test/questions");
        assert_eq!(join_path("/create-test/", "/absolute"), "/absolute");
        assert_eq!(join_path("", ""), "/");
    }
}
