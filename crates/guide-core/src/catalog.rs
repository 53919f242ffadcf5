//! 가이드 카탈로그 핸들.
//!
//! 카탈로그는 구성이 끝난 뒤 변경되지 않는 읽기 전용 트리입니다.
//! 전역 싱글턴을 두지 않습니다. 호출자가 직접 생성하여 전달하고,
//! 여러 스레드에서 공유할 때는 [`SharedCatalog`]로 감쌉니다.
//! 로컬라이즈 등으로 내용이 바뀌면 새 인스턴스를 만들어 핸들을
//! 통째로 교체합니다. 내부 필드를 고치는 일은 없습니다.

use std::sync::Arc;

use serde::Serialize;

use crate::content;
use crate::error::{GuideError, GuideResult};
use crate::section::{Section, SectionKey};
use crate::validate::{validate_sections, ValidationIssue};

/// 스레드 간 공유용 카탈로그 핸들.
///
/// 읽기에는 잠금이 필요 없습니다. 교체는 새 `Arc`를 발행하는
/// 원자적 스왑으로만 수행합니다.
pub type SharedCatalog = Arc<GuideCatalog>;

/// 가이드 카탈로그.
///
/// 섹션은 선언 순서대로 보관되며, 모든 접근은 공유 참조로만
/// 이루어집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideCatalog {
    sections: Vec<Section>,
}

impl GuideCatalog {
    /// 섹션 목록으로 카탈로그를 구성합니다.
    ///
    /// 구조적 결함(중복 섹션 키, 단계 번호 중복/불연속, 목록 내
    /// 사전 키 중복)이 있으면 [`GuideError::Construction`]으로
    /// 전체가 거부됩니다. 부분 카탈로그는 노출되지 않습니다.
    /// 내용상 결함(빈 필드, 잘못된 URL)은 구성을 막지 않으며
    /// [`GuideCatalog::validate`]로 일괄 보고됩니다.
    pub fn new(sections: Vec<Section>) -> GuideResult<Self> {
        let structural: Vec<ValidationIssue> = validate_sections(&sections)
            .into_iter()
            .filter(|issue| issue.kind.is_structural())
            .collect();

        if !structural.is_empty() {
            let detail = structural
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GuideError::Construction(detail));
        }

        tracing::debug!(sections = sections.len(), "가이드 카탈로그 구성 완료");

        Ok(Self { sections })
    }

    /// 내장 TwinStar 가이드 콘텐츠로 카탈로그를 구성합니다.
    pub fn builtin() -> GuideResult<Self> {
        Self::new(content::builtin_sections())
    }

    /// 키로 섹션을 조회합니다.
    ///
    /// 같은 키에 대해 항상 같은 값을 반환합니다. 무작위성도,
    /// 시간 의존성도 없습니다.
    pub fn section(&self, key: SectionKey) -> GuideResult<&Section> {
        self.sections
            .iter()
            .find(|section| section.key == key)
            .ok_or_else(|| GuideError::NotFound {
                key: key.as_str().to_string(),
            })
    }

    /// 키 문자열로 섹션을 조회합니다.
    ///
    /// 알 수 없는 키는 [`GuideError::NotFound`]를 반환할 뿐,
    /// 카탈로그 상태에는 어떤 영향도 주지 않습니다.
    pub fn get_section(&self, key: &str) -> GuideResult<&Section> {
        let parsed: SectionKey = key.parse().map_err(|_| GuideError::NotFound {
            key: key.to_string(),
        })?;
        self.section(parsed)
    }

    /// 섹션 키를 선언 순서대로 반환합니다.
    pub fn list_sections(&self) -> Vec<SectionKey> {
        self.sections.iter().map(|section| section.key).collect()
    }

    /// 전체 섹션을 선언 순서대로 순회합니다 (일괄 로딩용 진입점).
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// 섹션 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// 섹션이 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// 모든 콘텐츠 불변식을 검사하여 위반을 전부 반환합니다.
    ///
    /// 위반은 예외가 아니라 데이터입니다. 정상 카탈로그에서는
    /// 빈 목록이 반환됩니다.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_sections(&self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Step, StepList};
    use crate::section::SectionPayload;

    fn quick_start(nums: &[u32]) -> Section {
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
    fn test_construction_rejects_duplicate_keys() {
        let err = GuideCatalog::new(vec![quick_start(&[1]), quick_start(&[1])]).unwrap_err();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("quickStart"));
    }

    #[test]
    fn test_construction_rejects_broken_numbering() {
        let err = GuideCatalog::new(vec![quick_start(&[1, 3])]).unwrap_err();
        assert!(matches!(err, GuideError::Construction(_)));
    }

    #[test]
    fn test_partial_catalog_lookup() {
        // 테스트 더블: 섹션 하나짜리 부분 카탈로그
        let catalog = GuideCatalog::new(vec![quick_start(&[1, 2])]).unwrap();

        assert!(catalog.section(SectionKey::QuickStart).is_ok());
        assert!(matches!(
            catalog.section(SectionKey::Faq),
            Err(GuideError::NotFound { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = GuideCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_sections().is_empty());
    }

    #[test]
    fn test_shared_catalog_is_swappable() {
        let mut shared: SharedCatalog =
            Arc::new(GuideCatalog::new(vec![quick_start(&[1])]).unwrap());
        let reader = Arc::clone(&shared);

        // 새 인스턴스 발행 = 핸들 교체, 기존 독자는 이전 내용 유지
        shared = Arc::new(GuideCatalog::new(vec![quick_start(&[1, 2])]).unwrap());

        let steps_of = |catalog: &GuideCatalog| match &catalog
            .section(SectionKey::QuickStart)
            .unwrap()
            .payload
        {
            SectionPayload::Steps(list) => list.steps.len(),
            other => panic!("unexpected payload: {}", other.kind()),
        };

        assert_eq!(steps_of(&reader), 1);
        assert_eq!(steps_of(&shared), 2);
    }
}
