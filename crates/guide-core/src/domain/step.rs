//! 단계형 안내 항목.
//!
//! 빠른 시작 가이드처럼 번호가 매겨진 순서대로 표시되는 항목을 정의합니다.
//! 단계 번호는 목록 안에서 1부터 빈틈없이 이어져야 합니다.

use serde::{Deserialize, Serialize};

/// 번호가 매겨진 안내 단계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 단계 번호 (1부터 시작, 목록 내 유일)
    pub num: u32,

    /// 단계 제목
    pub title: String,

    /// 단계 설명
    pub desc: String,

    /// 표시용 아이콘 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// 추가 상세 설명 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Step {
    /// 새 단계를 생성합니다.
    pub fn new(num: u32, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            num,
            title: title.into(),
            desc: desc.into(),
            icon: None,
            detail: None,
        }
    }

    /// 아이콘을 설정합니다.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// 상세 설명을 설정합니다.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 단계 목록 페이로드.
///
/// `note`는 목록 아래에 표시되는 안내 문구입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepList {
    /// 표시 순서대로 정렬된 단계
    pub steps: Vec<Step>,

    /// 목록 하단 안내 문구 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StepList {
    /// 새 단계 목록을 생성합니다.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, note: None }
    }

    /// 하단 안내 문구를 설정합니다.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// 텔레그램 설정 안내 단계.
///
/// [`Step`]과 달리 `detail`이 필수입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramStep {
    /// 단계 번호 (1부터 시작, 목록 내 유일)
    pub num: u32,

    /// 단계 제목
    pub title: String,

    /// 단계 설명
    pub desc: String,

    /// 상세 안내 (예시 값 포함)
    pub detail: String,
}

impl TelegramStep {
    /// 새 텔레그램 단계를 생성합니다.
    pub fn new(
        num: u32,
        title: impl Into<String>,
        desc: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            num,
            title: title.into(),
            desc: desc.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_builder() {
        let step = Step::new(1, "API 설정", "설정 탭에서 거래소 API 키 등록").with_icon("🔑");

        assert_eq!(step.num, 1);
        assert_eq!(step.icon.as_deref(), Some("🔑"));
        assert!(step.detail.is_none());
    }

    #[test]
    fn test_step_list_note() {
        let list = StepList::new(vec![Step::new(1, "a", "b")]).with_note("※ 참고");
        assert_eq!(list.note.as_deref(), Some("※ 참고"));
    }

    #[test]
    fn test_telegram_step_requires_detail() {
        let step = TelegramStep::new(2, "Bot Token 복사", "토큰 복사", "예: 123456789:ABC");
        assert_eq!(step.detail, "예: 123456789:ABC");
    }
}
