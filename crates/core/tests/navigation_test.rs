//! End-to-end guard behavior over the quiz route table

use chrono::{DateTime, Duration, TimeZone, Utc};
use quizy_core::testing::{MemoryAuth, MemoryStorage};
use quizy_core::{GuardContext, NavigationDecision, NavigationGuard, RouteTable, Router, View};

const PUBLIC_PATHS: [&str; 6] = ["/auth", "/register", "/play", "/", "/play/5", "/play/5/result"];
const PROTECTED_PATHS: [&str; 6] = [
    "/create-test",
    "/create-test/questions",
    "/profile/me",
    "/profile/alice",
    "/quiz/5",
    "/quiz/5?edit=true",
];

fn now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_750_000_000, 0).unwrap()
}

fn check(path: &str, auth: &mut MemoryAuth, storage: &MemoryStorage) -> NavigationDecision {
    let table = RouteTable::quiz_routes();
    let guard = NavigationGuard::default();
    let mut ctx = GuardContext::new(auth, storage).at(now());
    guard.check(&table.resolve(path), &mut ctx)
}

fn login_redirect() -> NavigationDecision {
    NavigationDecision::Redirect("/auth".to_string())
}

#[test]
fn test_public_routes_proceed_in_every_session_state() {
    let expired = MemoryStorage::with_token("token", now() - Duration::days(1));

    for path in PUBLIC_PATHS {
        let mut anonymous = MemoryAuth::default();
        assert!(check(path, &mut anonymous, &MemoryStorage::default()).is_proceed());

        let mut stale = MemoryAuth::logged_in();
        assert!(check(path, &mut stale, &expired).is_proceed(), "{path}");
        assert_eq!(stale.logouts, 0, "{path}");
    }
}

#[test]
fn test_protected_routes_redirect_without_session() {
    for path in PROTECTED_PATHS {
        let mut auth = MemoryAuth::default();
        let storage = MemoryStorage::with_token("token", now() + Duration::hours(1));

        assert_eq!(check(path, &mut auth, &storage), login_redirect(), "{path}");
        assert_eq!(auth.logouts, 0);
    }
}

#[test]
fn test_expired_token_forces_logout() {
    for path in PROTECTED_PATHS {
        let mut auth = MemoryAuth::logged_in();
        let storage = MemoryStorage::with_token("token", now() - Duration::seconds(30));

        assert_eq!(check(path, &mut auth, &storage), login_redirect(), "{path}");
        assert_eq!(auth.logouts, 1, "{path}");
        assert!(!auth.logged_in);
    }
}

#[test]
fn test_valid_token_proceeds() {
    for path in PROTECTED_PATHS {
        let mut auth = MemoryAuth::logged_in();
        let storage = MemoryStorage::with_token("token", now() + Duration::minutes(4));

        assert!(check(path, &mut auth, &storage).is_proceed(), "{path}");
        assert!(auth.logged_in);
    }
}

#[test]
fn test_missing_token_with_session_proceeds() {
    let mut auth = MemoryAuth::logged_in();
    let decision = check("/profile/me", &mut auth, &MemoryStorage::default());

    assert!(decision.is_proceed());
    assert_eq!(auth.logouts, 0);
}

#[test]
fn test_profile_without_session_lands_on_auth() {
    let mut router = Router::default();
    let mut auth = MemoryAuth::default();
    let storage = MemoryStorage::default();
    let mut ctx = GuardContext::new(&mut auth, &storage).at(now());

    let navigation = router.push("/profile/me", &mut ctx).unwrap();
    assert_eq!(navigation.location.view(), Some(View::Auth));
    assert_eq!(navigation.redirected_from.as_deref(), Some("/profile/me"));

    let navigation = router.push("/play", &mut ctx).unwrap();
    assert_eq!(navigation.location.view(), Some(View::Play));
    assert!(!navigation.was_redirected());
}

#[test]
fn test_session_ends_after_expiry_mid_browsing() {
    let mut router = Router::default();
    let mut auth = MemoryAuth::logged_in();
    let storage = MemoryStorage::with_token("token", now() + Duration::minutes(4));

    {
        let mut ctx = GuardContext::new(&mut auth, &storage).at(now());
        let navigation = router.push("/quiz/1", &mut ctx).unwrap();
        assert_eq!(navigation.location.view(), Some(View::ShowQuiz));
    }

    {
        let mut ctx = GuardContext::new(&mut auth, &storage).at(now() + Duration::minutes(5));
        let navigation = router.push("/quiz/2", &mut ctx).unwrap();
        assert_eq!(navigation.location.view(), Some(View::Auth));
    }

    assert_eq!(auth.logouts, 1);
    assert!(!auth.logged_in);
}
