pub mod storage;
pub mod token;
pub mod token_store;
