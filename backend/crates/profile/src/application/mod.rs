//! Application Layer
//!
//! Ownership-scoped profile use cases. Each one takes the caller as an
//! [`auth::AuthenticatedUser`], so the owner can only come from the gate.

pub mod create_profile;
pub mod delete_my_profile;
pub mod get_my_profile;
pub mod list_profiles;
pub mod update_my_profile;

// Re-exports
pub use create_profile::CreateProfileUseCase;
pub use delete_my_profile::DeleteMyProfileUseCase;
pub use get_my_profile::GetMyProfileUseCase;
pub use list_profiles::ListProfilesUseCase;
pub use update_my_profile::UpdateMyProfileUseCase;
