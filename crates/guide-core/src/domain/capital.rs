//! 자본 관리 모드 설명.

use serde::{Deserialize, Serialize};

/// 자본 관리 모드 한 가지 (복리/고정).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalMode {
    /// 모드 이름 (목록 내 유일)
    pub name: String,

    /// 표시용 아이콘
    pub icon: String,

    /// 한 줄 설명
    pub desc: String,

    /// 동작 상세 설명
    pub detail: String,

    /// 예시 문구
    pub example: String,
}

impl CapitalMode {
    /// 새 자본 관리 모드를 생성합니다.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        desc: impl Into<String>,
        detail: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            desc: desc.into(),
            detail: detail.into(),
            example: example.into(),
        }
    }
}

/// 시드 잠금 기능 설명.
///
/// 모드 목록의 일원이 아니라 자본 관리 섹션에 하나만 붙는 항목입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedLock {
    /// 기능 제목
    pub title: String,

    /// 기능 설명
    pub desc: String,

    /// 사용 팁
    pub tip: String,
}

impl SeedLock {
    /// 새 시드 잠금 설명을 생성합니다.
    pub fn new(title: impl Into<String>, desc: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            tip: tip.into(),
        }
    }
}

/// 자본 관리 섹션 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGuide {
    /// 자본 관리 모드 목록
    pub modes: Vec<CapitalMode>,

    /// 시드 잠금 기능 설명
    #[serde(rename = "lockFeature")]
    pub lock: SeedLock,
}

impl CapitalGuide {
    /// 새 자본 관리 안내를 생성합니다.
    pub fn new(modes: Vec<CapitalMode>, lock: SeedLock) -> Self {
        Self { modes, lock }
    }
}
