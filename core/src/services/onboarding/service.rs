//! Main onboarding service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::account::{Account, AccountView, UserType};
use crate::domain::entities::otp::OtpCode;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::crypto::CredentialHasher;
use crate::services::email::EmailServiceTrait;

use super::config::OnboardingConfig;

/// Onboarding service enforcing the account activation state machine
///
/// All collaborators are injected so the service can be unit-tested with
/// the mock repository and a fake mailer/hasher.
pub struct OnboardingService<A, E, H>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    H: CredentialHasher,
{
    /// Account repository backed by the keyed document store
    account_repository: Arc<A>,
    /// Outbound email transport for OTP delivery
    email_service: Arc<E>,
    /// Salted one-way hashing primitive for passwords and OTPs
    hasher: Arc<H>,
    /// Service configuration
    config: OnboardingConfig,
}

impl<A, E, H> OnboardingService<A, E, H>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    H: CredentialHasher,
{
    /// Create a new onboarding service
    pub fn new(
        account_repository: Arc<A>,
        email_service: Arc<E>,
        hasher: Arc<H>,
        config: OnboardingConfig,
    ) -> Self {
        Self {
            account_repository,
            email_service,
            hasher,
            config,
        }
    }

    /// Onboard a new user: Unregistered -> PendingVerification
    ///
    /// This method:
    /// 1. Validates that all identity fields are non-empty and the email
    ///    address is deliverable
    /// 2. Generates a fresh OTP and stores the account record with the
    ///    OTP hash and a 10-minute expiry (conditional create)
    /// 3. Emails the plaintext OTP to the user
    ///
    /// If the email dispatch fails after the record write, the record is
    /// kept in PendingVerification and the error is surfaced; `resend_otp`
    /// is the documented recovery path.
    #[allow(clippy::too_many_arguments)]
    pub async fn onboard(
        &self,
        id_num: &str,
        name: &str,
        surname: &str,
        user_type: UserType,
        course: &str,
        email: &str,
    ) -> DomainResult<()> {
        // Step 1: All six identity fields are required
        for (field, value) in [
            ("idNum", id_num),
            ("name", name),
            ("surname", surname),
            ("course", course),
            ("email", email),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                    field: field.to_string(),
                }));
            }
        }

        if !self.email_service.is_valid_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }

        // Step 2: Issue the OTP and conditionally create the record.
        // The repository rejects a duplicate id_num atomically.
        let otp = OtpCode::generate();
        let otp_hash = self.hasher.hash(&otp.code)?;

        let account = Account::new(
            id_num.to_string(),
            name.to_string(),
            surname.to_string(),
            user_type,
            course.to_string(),
            email.to_string(),
            otp_hash,
            otp.expires_at,
        );

        self.account_repository.create(account).await?;

        info!(id_num, "account created, dispatching OTP email");

        // Step 3: Dispatch the plaintext OTP. A failure here leaves the
        // record pending; resend_otp recovers.
        self.send_otp_email(id_num, email, &otp.code).await?;

        Ok(())
    }

    /// Check a submitted OTP against the pending one
    ///
    /// Valid iff an OTP hash is stored AND the expiry has not passed AND
    /// the submitted code hashes to the stored digest. Every failure mode,
    /// including an unknown `id_num`, collapses into the single uniform
    /// `InvalidOrExpiredOtp` outcome so the response shape leaks nothing.
    ///
    /// This is a check, not a consuming transition: the record is not
    /// mutated and stays in PendingVerification.
    pub async fn verify_otp(&self, id_num: &str, otp: &str) -> DomainResult<()> {
        let account = match self.account_repository.find_by_id(id_num).await? {
            Some(account) => account,
            None => {
                warn!(id_num, "OTP verification for unknown account");
                return Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp));
            }
        };

        let valid = account.has_usable_otp()
            && account
                .otp_hash
                .as_deref()
                .map(|digest| self.hasher.verify(otp, digest))
                .unwrap_or(false);

        if valid {
            info!(id_num, "OTP verified");
            Ok(())
        } else {
            warn!(id_num, "OTP verification failed");
            Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp))
        }
    }

    /// Set the account password: PendingVerification -> Activated
    ///
    /// Trusts that the caller completed `verify_otp` (stateless two-step
    /// handshake; no server-held "verified" flag). Atomically sets the
    /// password hash and clears both OTP fields.
    pub async fn set_password(&self, id_num: &str, password: &str) -> DomainResult<()> {
        if password.trim().is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                field: "password".to_string(),
            }));
        }

        let password_hash = self.hasher.hash(password)?;
        self.account_repository
            .activate(id_num, &password_hash)
            .await?;

        info!(id_num, "account activated");
        Ok(())
    }

    /// Authenticate against an activated account
    ///
    /// Succeeds iff the record exists, a password has been set, and the
    /// submitted password verifies against the stored hash. All failure
    /// modes collapse into the uniform `InvalidCredentials` outcome; the
    /// response never reveals whether the account exists.
    pub async fn login(&self, id_num: &str, password: &str) -> DomainResult<()> {
        let account = self.account_repository.find_by_id(id_num).await?;

        let valid = account
            .as_ref()
            .and_then(|a| a.password_hash.as_deref())
            .map(|digest| self.hasher.verify(password, digest))
            .unwrap_or(false);

        if valid {
            info!(id_num, "login succeeded");
            Ok(())
        } else {
            warn!(id_num, "login failed");
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        }
    }

    /// Reissue the OTP on a not-yet-activated account
    ///
    /// Overwrites any prior pending OTP (the old code becomes invalid even
    /// if unexpired) and re-sends the email. Rejected on an Activated
    /// account: reissuing there would have to null the password to keep the
    /// mutual-exclusion invariant, which is never done implicitly.
    pub async fn resend_otp(&self, id_num: &str) -> DomainResult<()> {
        let account = self
            .account_repository
            .find_by_id(id_num)
            .await?
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        if account.is_activated() {
            return Err(DomainError::Auth(AuthError::AlreadyActivated));
        }

        let otp = OtpCode::generate();
        let otp_hash = self.hasher.hash(&otp.code)?;

        self.account_repository
            .reissue_otp(id_num, &otp_hash, otp.expires_at)
            .await?;

        info!(id_num, "OTP reissued");

        self.send_otp_email(id_num, &account.email, &otp.code).await
    }

    /// Fetch an account view with all credential material stripped
    pub async fn get_user_by_id(&self, id_num: &str) -> DomainResult<AccountView> {
        let account = self
            .account_repository
            .find_by_id(id_num)
            .await?
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        Ok(account.view())
    }

    /// Fetch only the user type of an account
    pub async fn get_user_type_by_id(&self, id_num: &str) -> DomainResult<UserType> {
        let account = self
            .account_repository
            .find_by_id(id_num)
            .await?
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        Ok(account.user_type)
    }

    /// Build and dispatch the OTP email
    async fn send_otp_email(&self, id_num: &str, email: &str, otp: &str) -> DomainResult<()> {
        let body = format!(
            "Hi {id_num},\n\nYour OTP is: {otp}\n\nUse this to verify your account. \
             The code expires in 10 minutes."
        );

        match self
            .email_service
            .send_email(email, &self.config.email_subject, &body)
            .await
        {
            Ok(message_id) => {
                info!(id_num, %message_id, "OTP email dispatched");
                Ok(())
            }
            Err(e) => {
                warn!(id_num, error = %e, "OTP email dispatch failed");
                Err(DomainError::Auth(AuthError::EmailServiceFailure))
            }
        }
    }
}
