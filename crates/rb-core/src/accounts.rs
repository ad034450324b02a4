//! Sign-up and sign-in flows over an [`IdentityRepo`].

use std::sync::Arc;

use log::info;
use secrecy::SecretString;

use crate::error::{AppError, Result};
use crate::session::SessionContext;
use crate::traits::IdentityRepo;

/// Fields of the sign-up form that matter to the account directory.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AccountService {
    identities: Arc<dyn IdentityRepo>,
}

impl AccountService {
    pub fn new(identities: Arc<dyn IdentityRepo>) -> Self {
        Self { identities }
    }

    /// Registers the account and signs the session into it.
    pub async fn sign_up(&self, session: &mut SessionContext, form: SignUp) -> Result<()> {
        if form.password != form.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        self.identities
            .register(&form.email, SecretString::from(form.password))
            .await?;
        session.sign_in(&form.email);
        info!("registered account {}", form.email);
        Ok(())
    }

    pub async fn sign_in(&self, session: &mut SessionContext, email: &str, password: &str) -> Result<()> {
        let email = self.identities.authenticate(email, password).await?;
        session.sign_in(&email);
        Ok(())
    }

    /// A session is valid when it is anonymous or its account still exists.
    pub async fn session_is_valid(&self, session: &SessionContext) -> Result<bool> {
        match session.identity.as_deref() {
            Some(email) => self.identities.contains(email).await,
            None => Ok(true),
        }
    }
}
