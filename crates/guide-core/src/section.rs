//! 섹션 키, 섹션, 섹션 페이로드 정의.
//!
//! 카탈로그는 고정된 11개 섹션으로 구성되며, 각 섹션은 키와 제목,
//! 그리고 섹션 종류별 형태가 다른 페이로드를 가집니다.
//! 소비자는 키로 색인하고 페이로드를 전수 매칭으로 처리합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    CapitalGuide, ErrorList, FaqList, MethodSet, NotificationSpec, OptimizationModeSet,
    ReferralSet, StepList, TabList, WorkflowList,
};

/// 섹션 키.
///
/// 값과 선언 순서는 안정적인 공개 계약입니다. 키 이름을 바꾸는 것은
/// 소비자 입장에서 호환성이 깨지는 변경입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    /// 빠른 시작 가이드
    QuickStart,
    /// 프로그램 운영 순서
    Workflow,
    /// 각 탭 기능 설명
    Tabs,
    /// 거래소별 매매법
    TradingMethods,
    /// 텔레그램 알림 설정
    Telegram,
    /// 거래소 가입 혜택
    Referrals,
    /// 자주 묻는 질문
    Faq,
    /// 주의사항
    Warnings,
    /// 주요 에러 해결
    Errors,
    /// 자본 관리 모드
    CapitalManagement,
    /// 최적화 검색 모드
    OptimizationModes,
}

impl SectionKey {
    /// 카탈로그 선언 순서의 전체 키 목록.
    pub const ALL: [SectionKey; 11] = [
        SectionKey::QuickStart,
        SectionKey::Workflow,
        SectionKey::Tabs,
        SectionKey::TradingMethods,
        SectionKey::Telegram,
        SectionKey::Referrals,
        SectionKey::Faq,
        SectionKey::Warnings,
        SectionKey::Errors,
        SectionKey::CapitalManagement,
        SectionKey::OptimizationModes,
    ];

    /// 안정 키 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::QuickStart => "quickStart",
            SectionKey::Workflow => "workflow",
            SectionKey::Tabs => "tabs",
            SectionKey::TradingMethods => "tradingMethods",
            SectionKey::Telegram => "telegram",
            SectionKey::Referrals => "referrals",
            SectionKey::Faq => "faq",
            SectionKey::Warnings => "warnings",
            SectionKey::Errors => "errors",
            SectionKey::CapitalManagement => "capitalManagement",
            SectionKey::OptimizationModes => "optimizationModes",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("알 수 없는 섹션 키: {}", s))
    }
}

/// 섹션 페이로드.
///
/// 섹션 종류별 형태를 태그가 붙은 변형으로 표현하여
/// 렌더링 계층이 컴파일 타임에 전수 처리할 수 있게 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionPayload {
    /// 번호가 매겨진 단계 목록 (quickStart)
    Steps(StepList),
    /// 운영 순서 목록 (workflow)
    Workflow(WorkflowList),
    /// 탭 기능 설명 목록 (tabs)
    Tabs(TabList),
    /// 선물/현물 매매법 (tradingMethods)
    Methods(MethodSet),
    /// 텔레그램 설정 안내 (telegram)
    Notifications(NotificationSpec),
    /// 레퍼럴 안내 목록 (referrals)
    Referrals(ReferralSet),
    /// 질문/답변 목록 (faq)
    Faq(FaqList),
    /// 경고 문구 목록 (warnings)
    Warnings(WarningList),
    /// 에러 해결 안내 목록 (errors)
    Errors(ErrorList),
    /// 자본 관리 안내 (capitalManagement)
    CapitalModes(CapitalGuide),
    /// 최적화 모드 목록 (optimizationModes)
    OptimizationModes(OptimizationModeSet),
}

impl SectionPayload {
    /// 페이로드 종류 이름을 반환합니다 (로그/도구 출력용).
    pub fn kind(&self) -> &'static str {
        match self {
            SectionPayload::Steps(_) => "steps",
            SectionPayload::Workflow(_) => "workflow",
            SectionPayload::Tabs(_) => "tabs",
            SectionPayload::Methods(_) => "methods",
            SectionPayload::Notifications(_) => "notifications",
            SectionPayload::Referrals(_) => "referrals",
            SectionPayload::Faq(_) => "faq",
            SectionPayload::Warnings(_) => "warnings",
            SectionPayload::Errors(_) => "errors",
            SectionPayload::CapitalModes(_) => "capital_modes",
            SectionPayload::OptimizationModes(_) => "optimization_modes",
        }
    }
}

/// 경고 문구 목록 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningList {
    /// 표시 순서대로 정렬된 경고 문구
    pub items: Vec<String>,
}

impl WarningList {
    /// 새 경고 목록을 생성합니다.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// 카탈로그의 최상위 블록.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 섹션 키 (카탈로그 내 유일)
    pub key: SectionKey,

    /// 화면 표시 제목
    pub title: String,

    /// 섹션 페이로드
    #[serde(flatten)]
    pub payload: SectionPayload,
}

impl Section {
    /// 새 섹션을 생성합니다.
    pub fn new(key: SectionKey, title: impl Into<String>, payload: SectionPayload) -> Self {
        Self {
            key,
            title: title.into(),
            payload,
        }
    }
}
