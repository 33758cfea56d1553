pub mod logo;
pub mod pfp;
pub mod toast;
