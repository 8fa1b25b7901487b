pub mod games;
pub mod logger;
pub mod persistence;
pub mod storage;
pub mod version;
