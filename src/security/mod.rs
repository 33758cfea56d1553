pub mod guard;
pub mod role;
pub mod session;
pub mod storage;
pub mod token;
