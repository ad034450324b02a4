//! The single-editable-post rules, run against the in-memory post store.

use std::sync::Arc;

use rb_core::{AppError, EditController, EditState, PostDraft, PostRepo, SessionContext};
use rb_db_memory::MemoryPostRepo;

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: format!("{} body", title),
        tags: "Rust, Web".to_string(),
        summary: format!("{} summary", title),
        publish_date: "2025-05-11".to_string(),
    }
}

fn signed_in(email: &str) -> SessionContext {
    let mut session = SessionContext::new();
    session.sign_in(email);
    session
}

fn setup() -> (Arc<MemoryPostRepo>, EditController) {
    let repo = Arc::new(MemoryPostRepo::new());
    let editor = EditController::new(repo.clone());
    (repo, editor)
}

#[tokio::test]
async fn repeated_submits_insert_once_then_replace() {
    let (repo, editor) = setup();
    let mut session = signed_in("a@x.com");

    let first = editor.submit(&mut session, draft("v1")).await.unwrap();
    assert_eq!(repo.len().await.unwrap(), 1);

    for version in ["v2", "v3", "v4"] {
        let post = editor.submit(&mut session, draft(version)).await.unwrap();
        assert_eq!(post.id, first.id);
        assert_eq!(post.created_at, first.created_at);
        assert_eq!(repo.len().await.unwrap(), 1);
    }
    assert_eq!(repo.get_at(0).await.unwrap().title, "v4");
}

#[tokio::test]
async fn submit_then_request_edit_round_trips_the_draft() {
    let (_, editor) = setup();
    let mut session = signed_in("a@x.com");

    editor.submit(&mut session, draft("T1")).await.unwrap();
    let post = editor.request_edit(&session).await.unwrap();

    assert_eq!(post.draft(), draft("T1"));
    assert_eq!(post.author, "a@x.com");
}

#[tokio::test]
async fn two_authors_create_edit_and_delete() {
    let (repo, editor) = setup();
    let mut alice = signed_in("a@x.com");

    editor.submit(&mut alice, draft("T1")).await.unwrap();
    assert_eq!(repo.len().await.unwrap(), 1);
    assert_eq!(repo.get_at(0).await.unwrap().author, "a@x.com");

    editor.amend(&alice, draft("T2")).await.unwrap();
    assert_eq!(repo.len().await.unwrap(), 1);
    assert_eq!(repo.get_at(0).await.unwrap().title, "T2");

    let bob = signed_in("b@y.com");
    assert_eq!(editor.request_edit(&bob).await.unwrap_err(), AppError::EditNotAllowed);

    editor.request_delete(&mut alice, 0).await.unwrap();
    assert_eq!(repo.len().await.unwrap(), 0);
    assert_eq!(editor.state(&alice).await.unwrap(), EditState::NoPost);
    assert_eq!(alice.latest_post, None);
}

#[tokio::test]
async fn old_posts_become_read_only_after_sign_in_elsewhere() {
    let (repo, editor) = setup();

    let mut first_visit = signed_in("a@x.com");
    editor.submit(&mut first_visit, draft("first")).await.unwrap();

    // A second browser has no pointer: it creates rather than edits.
    let mut second_visit = signed_in("a@x.com");
    assert_eq!(editor.request_edit(&second_visit).await.unwrap_err(), AppError::EditNotAllowed);
    editor.submit(&mut second_visit, draft("second")).await.unwrap();

    assert_eq!(repo.len().await.unwrap(), 2);
    let titles: Vec<String> = repo.all().await.unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[tokio::test]
async fn delete_is_bounded_and_owner_only() {
    let (repo, editor) = setup();
    let mut alice = signed_in("a@x.com");
    let mut bob = signed_in("b@y.com");
    editor.submit(&mut alice, draft("alice")).await.unwrap();

    assert_eq!(
        editor.request_delete(&mut alice, 1).await.unwrap_err(),
        AppError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        editor.request_delete(&mut bob, 0).await.unwrap_err(),
        AppError::NotPostOwner
    );
    assert_eq!(repo.len().await.unwrap(), 1);
    assert!(matches!(editor.state(&alice).await.unwrap(), EditState::HasEditablePost(_)));
}

#[tokio::test]
async fn deletes_by_others_never_redirect_a_session_pointer() {
    let (repo, editor) = setup();
    let mut alice = signed_in("a@x.com");
    let mut bob = signed_in("b@y.com");

    editor.submit(&mut alice, draft("alice")).await.unwrap();
    editor.submit(&mut bob, draft("bob")).await.unwrap();
    // Feed is now [bob, alice]; bob deleting index 0 shifts alice's post up.
    editor.request_delete(&mut bob, 0).await.unwrap();

    let post = editor.request_edit(&alice).await.unwrap();
    assert_eq!(post.title, "alice");
    editor.submit(&mut alice, draft("alice v2")).await.unwrap();
    assert_eq!(repo.len().await.unwrap(), 1);
    assert_eq!(repo.get_at(0).await.unwrap().title, "alice v2");
}

#[tokio::test]
async fn newer_post_by_another_author_freezes_the_old_one() {
    let (repo, editor) = setup();
    let mut alice = signed_in("a@x.com");
    let mut bob = signed_in("b@y.com");

    let original = editor.submit(&mut alice, draft("alice")).await.unwrap();
    editor.submit(&mut bob, draft("bob")).await.unwrap();

    // Feed is [bob, alice]: alice's post is no longer the newest.
    assert_eq!(editor.state(&alice).await.unwrap(), EditState::StaleReference);
    assert_eq!(editor.request_edit(&alice).await.unwrap_err(), AppError::EditNotAllowed);
    assert_eq!(editor.amend(&alice, draft("alice v2")).await.unwrap_err(), AppError::EditNotAllowed);

    let fresh = editor.submit(&mut alice, draft("alice v2")).await.unwrap();
    assert_ne!(fresh.id, original.id);
    assert_eq!(alice.latest_post, Some(fresh.id));

    let titles: Vec<String> = repo.all().await.unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["alice v2", "bob", "alice"]);
    assert_eq!(repo.get_at(2).await.unwrap().id, original.id);
}

#[tokio::test]
async fn racing_first_submits_from_one_cookie_both_create() {
    let (repo, editor) = setup();
    // Two requests that carried the same cookie, before either response came back.
    let mut first = signed_in("a@x.com");
    let mut second = first.clone();

    let a = editor.submit(&mut first, draft("a")).await.unwrap();
    let b = editor.submit(&mut second, draft("b")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(repo.len().await.unwrap(), 2);

    // Whichever cookie the browser keeps, only the newest post stays editable.
    assert_eq!(editor.state(&first).await.unwrap(), EditState::StaleReference);
    assert_eq!(editor.request_edit(&second).await.unwrap().id, b.id);
}

#[tokio::test]
async fn deleting_an_older_post_keeps_the_latest_editable() {
    let (repo, editor) = setup();

    let mut old_visit = signed_in("a@x.com");
    editor.submit(&mut old_visit, draft("old")).await.unwrap();
    let mut session = signed_in("a@x.com");
    let latest = editor.submit(&mut session, draft("new")).await.unwrap();

    // "old" now sits at index 1.
    editor.request_delete(&mut session, 1).await.unwrap();
    assert_eq!(session.latest_post, Some(latest.id));
    assert_eq!(editor.request_edit(&session).await.unwrap().id, latest.id);
    assert_eq!(repo.len().await.unwrap(), 1);
}

#[tokio::test]
async fn stale_pointer_fails_closed_then_submit_creates() {
    let (repo, editor) = setup();
    let mut session = signed_in("a@x.com");
    let post = editor.submit(&mut session, draft("mine")).await.unwrap();

    // Removed behind the session's back.
    repo.remove(post.id).await.unwrap();

    assert_eq!(editor.state(&session).await.unwrap(), EditState::StaleReference);
    assert_eq!(editor.request_edit(&session).await.unwrap_err(), AppError::EditNotAllowed);
    assert_eq!(editor.amend(&session, draft("x")).await.unwrap_err(), AppError::EditNotAllowed);

    let fresh = editor.submit(&mut session, draft("again")).await.unwrap();
    assert_ne!(fresh.id, post.id);
    assert_eq!(session.latest_post, Some(fresh.id));
    assert_eq!(repo.len().await.unwrap(), 1);
}

#[tokio::test]
async fn anonymous_sessions_cannot_mutate() {
    let (repo, editor) = setup();
    let mut anon = SessionContext::new();

    assert_eq!(editor.submit(&mut anon, draft("x")).await.unwrap_err(), AppError::NotAuthenticated);
    assert_eq!(editor.request_edit(&anon).await.unwrap_err(), AppError::NotAuthenticated);
    assert_eq!(editor.request_delete(&mut anon, 0).await.unwrap_err(), AppError::NotAuthenticated);
    assert_eq!(repo.len().await.unwrap(), 0);
}
