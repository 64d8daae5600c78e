use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::entities::{ProfileRecord, UpdateProfileInput, UserProfile},
};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<ProfileRecord, CoreError>> + Send;

    fn store(&self, record: ProfileRecord) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the user profile
#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    /// Forgets every durable value (profile and history) and drops live
    /// sessions.
    fn logout(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
