//! 자주 묻는 질문.

use serde::{Deserialize, Serialize};

/// 질문/답변 한 쌍.
///
/// 목록 순서가 곧 표시 순서입니다. 의미상 정렬되어 있지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// 질문
    pub q: String,

    /// 답변
    pub a: String,
}

impl FaqItem {
    /// 새 질문/답변을 생성합니다.
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}

/// FAQ 목록 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqList {
    /// 표시 순서대로 정렬된 항목
    pub items: Vec<FaqItem>,
}

impl FaqList {
    /// 새 FAQ 목록을 생성합니다.
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self { items }
    }
}
