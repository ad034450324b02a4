use std::sync::Arc;

use rb_core::{AccountService, AppError, IdentityRepo, SessionContext, SignUp};
use rb_db_memory::MemoryIdentityRepo;

fn sign_up_form(email: &str, password: &str, confirm: &str) -> SignUp {
    SignUp {
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn sign_up_registers_and_signs_in() {
    let repo = Arc::new(MemoryIdentityRepo::new());
    let accounts = AccountService::new(repo.clone());

    let mut session = SessionContext::new();
    accounts.sign_up(&mut session, sign_up_form("a@x.com", "pw", "pw")).await.unwrap();

    assert_eq!(session.require_identity(), Ok("a@x.com"));
    assert!(repo.contains("a@x.com").await.unwrap());
    assert!(accounts.session_is_valid(&session).await.unwrap());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let accounts = AccountService::new(Arc::new(MemoryIdentityRepo::new()));

    let mut first = SessionContext::new();
    accounts.sign_up(&mut first, sign_up_form("a@x.com", "pw", "pw")).await.unwrap();

    let mut second = SessionContext::new();
    let err = accounts
        .sign_up(&mut second, sign_up_form("a@x.com", "other", "other"))
        .await
        .unwrap_err();
    assert_eq!(err, AppError::DuplicateIdentity);
    assert!(!second.is_signed_in());

    // The original password still works.
    accounts.sign_in(&mut second, "a@x.com", "pw").await.unwrap();
}

#[tokio::test]
async fn password_mismatch_leaves_store_untouched() {
    let repo = Arc::new(MemoryIdentityRepo::new());
    let accounts = AccountService::new(repo.clone());

    let mut session = SessionContext::new();
    let err = accounts
        .sign_up(&mut session, sign_up_form("a@x.com", "pw", "typo"))
        .await
        .unwrap_err();

    assert_eq!(err, AppError::PasswordMismatch);
    assert!(!repo.contains("a@x.com").await.unwrap());
}

#[tokio::test]
async fn wrong_password_or_unknown_email_is_invalid() {
    let accounts = AccountService::new(Arc::new(MemoryIdentityRepo::new()));
    let mut owner = SessionContext::new();
    accounts.sign_up(&mut owner, sign_up_form("a@x.com", "pw", "pw")).await.unwrap();

    let mut session = SessionContext::new();
    assert_eq!(
        accounts.sign_in(&mut session, "a@x.com", "nope").await.unwrap_err(),
        AppError::InvalidCredentials
    );
    assert_eq!(
        accounts.sign_in(&mut session, "ghost@x.com", "pw").await.unwrap_err(),
        AppError::InvalidCredentials
    );
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn session_for_unknown_account_is_invalid() {
    let accounts = AccountService::new(Arc::new(MemoryIdentityRepo::new()));
    let mut session = SessionContext::new();
    assert!(accounts.session_is_valid(&session).await.unwrap());

    session.sign_in("ghost@x.com");
    assert!(!accounts.session_is_valid(&session).await.unwrap());
}
