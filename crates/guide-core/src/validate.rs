//! 카탈로그 콘텐츠 검증.
//!
//! 섹션 목록 전체를 훑어 콘텐츠 불변식 위반을 **모두** 수집합니다.
//! 검증 결과는 예외가 아니라 데이터로 반환되어, 콘텐츠 작성자가
//! 한 번에 모든 문제를 고칠 수 있습니다.
//!
//! 구조적 결함(중복 키, 단계 번호 오류)은 카탈로그 구성 시점에도
//! 치명적으로 거부됩니다. [`IssueKind::is_structural`] 참고.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::domain::TradingMethod;
use crate::section::{Section, SectionKey, SectionPayload};

/// 검증 이슈 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// 카탈로그 내 중복된 섹션 키
    DuplicateSectionKey,
    /// 단계 목록 내 중복된 단계 번호
    DuplicateStepNum,
    /// 1부터 연속되지 않는 단계 번호
    NonContiguousStepNum,
    /// 목록 내 사전 키 역할 필드의 중복 (type/name/error)
    DuplicateEntryKey,
    /// 비어 있는 필수 필드
    EmptyField,
    /// 절대 URL로 해석되지 않는 링크
    InvalidUrl,
}

impl IssueKind {
    /// 카탈로그 구성 시 치명적으로 거부되는 구조적 결함인지 확인합니다.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            IssueKind::DuplicateSectionKey
                | IssueKind::DuplicateStepNum
                | IssueKind::NonContiguousStepNum
                | IssueKind::DuplicateEntryKey
        )
    }
}

/// 검증 이슈 한 건.
///
/// 에러로 던지지 않고 항상 데이터로 반환됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// 이슈가 발견된 섹션
    pub section: SectionKey,

    /// 이슈 분류
    pub kind: IssueKind,

    /// 사람이 읽는 설명
    pub message: String,
}

impl ValidationIssue {
    fn new(section: SectionKey, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            section,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.section, self.message)
    }
}

/// 섹션 목록의 모든 불변식 위반을 섹션 순서대로 수집합니다.
///
/// 구성 전의 원시 섹션 목록을 받으므로, 구성 단계에서 거부될 콘텐츠도
/// 저작 도구가 검사할 수 있습니다.
pub fn validate_sections(sections: &[Section]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_keys: HashSet<SectionKey> = HashSet::new();

    for section in sections {
        if !seen_keys.insert(section.key) {
            issues.push(ValidationIssue::new(
                section.key,
                IssueKind::DuplicateSectionKey,
                format!("중복된 섹션 키: {}", section.key),
            ));
        }

        require(&mut issues, section.key, "title", &section.title);
        validate_payload(&mut issues, section);
    }

    issues
}

fn validate_payload(issues: &mut Vec<ValidationIssue>, section: &Section) {
    let key = section.key;

    match &section.payload {
        SectionPayload::Steps(list) => {
            let nums: Vec<u32> = list.steps.iter().map(|s| s.num).collect();
            check_step_numbers(issues, key, &nums);
            for (i, step) in list.steps.iter().enumerate() {
                require(issues, key, &format!("steps[{}].title", i), &step.title);
                require(issues, key, &format!("steps[{}].desc", i), &step.desc);
            }
        }

        SectionPayload::Workflow(list) => {
            for (i, item) in list.items.iter().enumerate() {
                require(issues, key, &format!("items[{}].step", i), &item.step);
                require(issues, key, &format!("items[{}].desc", i), &item.desc);
                require(issues, key, &format!("items[{}].tab", i), &item.tab);
            }
        }

        SectionPayload::Tabs(list) => {
            check_unique(issues, key, "탭 이름", list.items.iter().map(|t| t.name.as_str()));
            for (i, tab) in list.items.iter().enumerate() {
                require(issues, key, &format!("items[{}].name", i), &tab.name);
                require(issues, key, &format!("items[{}].desc", i), &tab.desc);
                for (j, feature) in tab.features.iter().enumerate() {
                    require(issues, key, &format!("items[{}].features[{}]", i, j), feature);
                }
            }
        }

        SectionPayload::Methods(set) => {
            validate_method(issues, key, "futures", &set.futures);
            validate_method(issues, key, "spot", &set.spot);
        }

        SectionPayload::Notifications(spec) => {
            let nums: Vec<u32> = spec.steps.iter().map(|s| s.num).collect();
            check_step_numbers(issues, key, &nums);
            for (i, step) in spec.steps.iter().enumerate() {
                require(issues, key, &format!("steps[{}].title", i), &step.title);
                require(issues, key, &format!("steps[{}].desc", i), &step.desc);
                require(issues, key, &format!("steps[{}].detail", i), &step.detail);
            }

            check_unique(issues, key, "알림 유형", spec.types.iter().map(|t| t.kind.as_str()));
            for (i, ty) in spec.types.iter().enumerate() {
                require(issues, key, &format!("types[{}].type", i), &ty.kind);
                require(issues, key, &format!("types[{}].label", i), &ty.label);
                require(issues, key, &format!("types[{}].desc", i), &ty.desc);
            }
        }

        SectionPayload::Referrals(set) => {
            check_unique(
                issues,
                key,
                "거래소 이름",
                set.exchanges.iter().map(|e| e.name.as_str()),
            );
            for (i, exchange) in set.exchanges.iter().enumerate() {
                require(issues, key, &format!("exchanges[{}].name", i), &exchange.name);
                require(issues, key, &format!("exchanges[{}].guide", i), &exchange.guide);
                for (j, benefit) in exchange.benefits.iter().enumerate() {
                    require(issues, key, &format!("exchanges[{}].benefits[{}]", i, j), benefit);
                }
                if Url::parse(&exchange.link).is_err() {
                    issues.push(ValidationIssue::new(
                        key,
                        IssueKind::InvalidUrl,
                        format!("{}의 링크가 절대 URL이 아님: {}", exchange.name, exchange.link),
                    ));
                }
            }
        }

        SectionPayload::Faq(list) => {
            for (i, item) in list.items.iter().enumerate() {
                require(issues, key, &format!("items[{}].q", i), &item.q);
                require(issues, key, &format!("items[{}].a", i), &item.a);
            }
        }

        SectionPayload::Warnings(list) => {
            for (i, item) in list.items.iter().enumerate() {
                require(issues, key, &format!("items[{}]", i), item);
            }
        }

        SectionPayload::Errors(list) => {
            check_unique(
                issues,
                key,
                "에러 코드",
                list.items.iter().map(|e| e.error.as_str()),
            );
            for (i, item) in list.items.iter().enumerate() {
                require(issues, key, &format!("items[{}].error", i), &item.error);
                require(issues, key, &format!("items[{}].cause", i), &item.cause);
                require(issues, key, &format!("items[{}].solution", i), &item.solution);
            }
        }

        SectionPayload::CapitalModes(guide) => {
            check_unique(issues, key, "모드 이름", guide.modes.iter().map(|m| m.name.as_str()));
            for (i, mode) in guide.modes.iter().enumerate() {
                require(issues, key, &format!("modes[{}].name", i), &mode.name);
                require(issues, key, &format!("modes[{}].icon", i), &mode.icon);
                require(issues, key, &format!("modes[{}].desc", i), &mode.desc);
                require(issues, key, &format!("modes[{}].detail", i), &mode.detail);
                require(issues, key, &format!("modes[{}].example", i), &mode.example);
            }
            require(issues, key, "lockFeature.title", &guide.lock.title);
            require(issues, key, "lockFeature.desc", &guide.lock.desc);
            require(issues, key, "lockFeature.tip", &guide.lock.tip);
        }

        SectionPayload::OptimizationModes(set) => {
            check_unique(issues, key, "모드 이름", set.modes.iter().map(|m| m.name.as_str()));
            for (i, mode) in set.modes.iter().enumerate() {
                require(issues, key, &format!("modes[{}].name", i), &mode.name);
                require(issues, key, &format!("modes[{}].combinations", i), &mode.combinations);
                require(issues, key, &format!("modes[{}].time", i), &mode.time);
                require(issues, key, &format!("modes[{}].desc", i), &mode.desc);
            }
        }
    }
}

fn validate_method(
    issues: &mut Vec<ValidationIssue>,
    key: SectionKey,
    slot: &str,
    method: &TradingMethod,
) {
    require(issues, key, &format!("{}.name", slot), &method.name);
    if method.exchanges.is_empty() {
        require(issues, key, &format!("{}.exchanges", slot), "");
    }
    for (i, exchange) in method.exchanges.iter().enumerate() {
        require(issues, key, &format!("{}.exchanges[{}]", slot, i), exchange);
    }
    for (i, feature) in method.features.iter().enumerate() {
        require(issues, key, &format!("{}.features[{}]", slot, i), feature);
    }
    for (i, param) in method.params.iter().enumerate() {
        require(issues, key, &format!("{}.params[{}].name", slot, i), &param.name);
        require(issues, key, &format!("{}.params[{}].value", slot, i), &param.value);
    }
    for (i, tip) in method.tips.iter().enumerate() {
        require(issues, key, &format!("{}.tips[{}]", slot, i), tip);
    }
    for (i, warning) in method.warnings.iter().enumerate() {
        require(issues, key, &format!("{}.warnings[{}]", slot, i), warning);
    }
}

/// 단계 번호가 목록 순서대로 1부터 빈틈없이 이어지는지 검사합니다.
///
/// 중복이 있으면 중복된 값마다 이슈 하나만 보고하고,
/// 연속성 검사는 중복이 없을 때만 수행합니다. 같은 원인이
/// 이슈 두 건으로 불어나지 않게 하는 규칙입니다.
fn check_step_numbers(issues: &mut Vec<ValidationIssue>, key: SectionKey, nums: &[u32]) {
    let mut seen = HashSet::new();
    let mut duplicated = Vec::new();
    for &num in nums {
        if !seen.insert(num) && !duplicated.contains(&num) {
            duplicated.push(num);
        }
    }

    for num in &duplicated {
        issues.push(ValidationIssue::new(
            key,
            IssueKind::DuplicateStepNum,
            format!("중복된 단계 번호: {}", num),
        ));
    }

    if duplicated.is_empty() {
        let contiguous = nums
            .iter()
            .enumerate()
            .all(|(idx, &num)| num == idx as u32 + 1);
        if !contiguous {
            issues.push(ValidationIssue::new(
                key,
                IssueKind::NonContiguousStepNum,
                format!("단계 번호는 1부터 순서대로 이어져야 함: {:?}", nums),
            ));
        }
    }
}

fn check_unique<'a>(
    issues: &mut Vec<ValidationIssue>,
    key: SectionKey,
    label: &str,
    values: impl IntoIterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            issues.push(ValidationIssue::new(
                key,
                IssueKind::DuplicateEntryKey,
                format!("중복된 {}: {}", label, value),
            ));
        }
    }
}

fn require(issues: &mut Vec<ValidationIssue>, key: SectionKey, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(
            key,
            IssueKind::EmptyField,
            format!("필수 필드가 비어 있음: {}", field),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FaqItem, FaqList, ReferralExchange, ReferralSet, Step, StepList};
    use crate::section::Section;

    fn steps_section(nums: &[u32]) -> Section {
        let steps = nums
            .iter()
            .map(|&n| Step::new(n, format!("단계 {}", n), "설명"))
            .collect();
        Section::new(
            SectionKey::QuickStart,
            "🚀 빠른 시작 가이드",
            SectionPayload::Steps(StepList::new(steps)),
        )
    }

    #[test]
    fn test_duplicate_step_num_reports_single_issue() {
        // 2번이 두 번 등장: 중복 이슈 하나만, 연속성 이슈는 없어야 함
        let issues = validate_sections(&[steps_section(&[1, 2, 2, 4])]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].section, SectionKey::QuickStart);
        assert_eq!(issues[0].kind, IssueKind::DuplicateStepNum);
        assert!(issues[0].message.contains('2'));
    }

    #[test]
    fn test_non_contiguous_step_num() {
        let issues = validate_sections(&[steps_section(&[1, 3])]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NonContiguousStepNum);
    }

    #[test]
    fn test_step_renumbering_required_on_reorder() {
        // 목록 순서를 바꾸면 번호도 다시 매겨야 한다
        let issues = validate_sections(&[steps_section(&[2, 1, 3])]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NonContiguousStepNum);
    }

    #[test]
    fn test_duplicate_section_key() {
        let issues = validate_sections(&[steps_section(&[1]), steps_section(&[1])]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateSectionKey);
        assert!(issues[0].kind.is_structural());
    }

    #[test]
    fn test_invalid_referral_link() {
        let section = Section::new(
            SectionKey::Referrals,
            "🎁 거래소 가입 혜택",
            SectionPayload::Referrals(ReferralSet::new(vec![ReferralExchange::new(
                "Bybit",
                ["수수료 20% 평생 할인"],
                "1. 아래 링크로 가입",
                "not-a-url",
            )])),
        );

        let issues = validate_sections(&[section]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidUrl);
        assert!(!issues[0].kind.is_structural());
        assert!(issues[0].message.contains("not-a-url"));
    }

    #[test]
    fn test_empty_required_field() {
        let section = Section::new(
            SectionKey::Faq,
            "❓ 자주 묻는 질문",
            SectionPayload::Faq(FaqList::new(vec![FaqItem::new("질문", "")])),
        );

        let issues = validate_sections(&[section]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::EmptyField);
        assert!(issues[0].message.contains("items[0].a"));
    }

    #[test]
    fn test_issue_display_includes_section() {
        let issues = validate_sections(&[steps_section(&[1, 1])]);
        assert!(issues[0].to_string().starts_with("[quickStart]"));
    }
}
