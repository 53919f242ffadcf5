//! 탭 기능 설명 항목.

use serde::{Deserialize, Serialize};

/// 화면 탭 하나의 기능 설명.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// 탭 표시명 (목록 내 유일)
    pub name: String,

    /// 탭 설명
    pub desc: String,

    /// 주요 기능 목록 (표시 순서)
    pub features: Vec<String>,
}

impl Tab {
    /// 새 탭 설명을 생성합니다.
    pub fn new<I, S>(name: impl Into<String>, desc: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            desc: desc.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

/// 탭 설명 목록 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabList {
    /// 표시 순서대로 정렬된 탭
    pub items: Vec<Tab>,
}

impl TabList {
    /// 새 탭 목록을 생성합니다.
    pub fn new(items: Vec<Tab>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_features_order() {
        let tab = Tab::new("📊 매매", "실시간 거래 실행", ["단일 거래", "잔고 새로고침"]);
        assert_eq!(tab.features, vec!["단일 거래", "잔고 새로고침"]);
    }
}
