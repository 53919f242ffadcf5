//! CLI 명령어 구현 모듈.

pub mod export;
pub mod sections;
pub mod show;
pub mod validate;
