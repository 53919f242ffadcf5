//! 거래소 가입 혜택 (레퍼럴) 안내.

use serde::{Deserialize, Serialize};

/// 거래소 한 곳의 가입 혜택 안내.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralExchange {
    /// 거래소 이름 (목록 내 유일)
    pub name: String,

    /// 가입 혜택 목록
    pub benefits: Vec<String>,

    /// 가입 절차 안내 (줄바꿈 포함 가능)
    pub guide: String,

    /// 가입 링크 (절대 URL이어야 함, 접속 가능 여부는 검증하지 않음)
    pub link: String,
}

impl ReferralExchange {
    /// 새 레퍼럴 안내를 생성합니다.
    pub fn new<I, S>(
        name: impl Into<String>,
        benefits: I,
        guide: impl Into<String>,
        link: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            benefits: benefits.into_iter().map(Into::into).collect(),
            guide: guide.into(),
            link: link.into(),
        }
    }
}

/// 레퍼럴 안내 목록 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralSet {
    /// 표시 순서대로 정렬된 거래소
    pub exchanges: Vec<ReferralExchange>,
}

impl ReferralSet {
    /// 새 레퍼럴 목록을 생성합니다.
    pub fn new(exchanges: Vec<ReferralExchange>) -> Self {
        Self { exchanges }
    }
}
