pub mod fine_tuning;
pub mod forbidden;
pub mod home;
pub mod invite;
pub mod login;
pub mod not_found;
pub mod onboarding;
pub mod settings;
pub mod workspace;
