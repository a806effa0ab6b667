pub mod credentials;
pub mod storage;
pub mod token;
