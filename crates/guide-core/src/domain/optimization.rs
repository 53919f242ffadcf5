//! 최적화 검색 모드 설명.
//!
//! 조합 수와 소요 시간은 대략적인 표시용 문자열입니다.

use serde::{Deserialize, Serialize};

/// 최적화 검색 모드 한 가지.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationMode {
    /// 모드 이름 (목록 내 유일)
    pub name: String,

    /// 대략적인 조합 수 (표시용, 예: "~3,600개")
    pub combinations: String,

    /// 대략적인 소요 시간 (표시용, 예: "~20분")
    pub time: String,

    /// 설명
    pub desc: String,
}

impl OptimizationMode {
    /// 새 최적화 모드를 생성합니다.
    pub fn new(
        name: impl Into<String>,
        combinations: impl Into<String>,
        time: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            combinations: combinations.into(),
            time: time.into(),
            desc: desc.into(),
        }
    }
}

/// 최적화 모드 목록 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationModeSet {
    /// 표시 순서대로 정렬된 모드
    pub modes: Vec<OptimizationMode>,
}

impl OptimizationModeSet {
    /// 새 최적화 모드 목록을 생성합니다.
    pub fn new(modes: Vec<OptimizationMode>) -> Self {
        Self { modes }
    }
}
