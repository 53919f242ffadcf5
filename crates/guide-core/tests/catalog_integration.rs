//! 내장 카탈로그 통합 테스트
//!
//! 렌더링 계층이 의존하는 계약을 내장 콘텐츠 전체에 대해 확인합니다.

use std::collections::HashSet;

use guide_core::{
    GuideCatalog, GuideError, IssueKind, Section, SectionKey, SectionPayload, Step, StepList,
};
use url::Url;

fn builtin() -> GuideCatalog {
    GuideCatalog::builtin().expect("내장 콘텐츠는 항상 구성 가능해야 함")
}

#[test]
fn test_section_keys_round_trip() {
    let catalog = builtin();

    for key in SectionKey::ALL {
        let section = catalog.get_section(key.as_str()).unwrap();
        assert_eq!(section.key, key);
    }
}

#[test]
fn test_list_sections_documented_order() {
    let catalog = builtin();

    // 문서화된 11개 키, 문서화된 순서, 호출마다 동일
    assert_eq!(catalog.list_sections(), SectionKey::ALL);
    assert_eq!(catalog.list_sections(), catalog.list_sections());
    assert_eq!(catalog.len(), 11);
}

#[test]
fn test_bulk_iteration_matches_keyed_access() {
    let catalog = builtin();

    let bulk: Vec<&Section> = catalog.sections().collect();
    for (key, section) in catalog.list_sections().into_iter().zip(&bulk) {
        assert_eq!(catalog.section(key).unwrap(), *section);
    }
}

#[test]
fn test_quick_start_step_numbering() {
    let catalog = builtin();
    let section = catalog.section(SectionKey::QuickStart).unwrap();

    match &section.payload {
        SectionPayload::Steps(list) => {
            let nums: Vec<u32> = list.steps.iter().map(|s| s.num).collect();
            assert_eq!(nums, vec![1, 2, 3, 4, 5, 6]);
            assert!(list.note.is_some());
        }
        other => panic!("quickStart 페이로드가 아님: {}", other.kind()),
    }
}

#[test]
fn test_telegram_step_numbering_and_details() {
    let catalog = builtin();
    let section = catalog.section(SectionKey::Telegram).unwrap();

    match &section.payload {
        SectionPayload::Notifications(spec) => {
            let nums: Vec<u32> = spec.steps.iter().map(|s| s.num).collect();
            assert_eq!(nums, vec![1, 2, 3, 4]);
            assert!(spec.steps.iter().all(|s| !s.detail.is_empty()));
        }
        other => panic!("telegram 페이로드가 아님: {}", other.kind()),
    }
}

#[test]
fn test_notification_types_and_defaults() {
    let catalog = builtin();
    let section = catalog.section(SectionKey::Telegram).unwrap();

    let SectionPayload::Notifications(spec) = &section.payload else {
        panic!("telegram 페이로드가 아님");
    };

    let kinds: HashSet<&str> = spec.types.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds.len(), spec.types.len(), "알림 유형 키 중복");
    assert_eq!(
        kinds,
        HashSet::from(["trade", "signal", "system", "daily"])
    );

    for ty in &spec.types {
        let expected_default = ty.kind != "daily";
        assert_eq!(ty.default, expected_default, "알림 유형: {}", ty.kind);
    }
}

#[test]
fn test_referral_links_are_absolute_urls() {
    let catalog = builtin();
    let section = catalog.section(SectionKey::Referrals).unwrap();

    let SectionPayload::Referrals(set) = &section.payload else {
        panic!("referrals 페이로드가 아님");
    };

    for exchange in &set.exchanges {
        assert!(
            Url::parse(&exchange.link).is_ok(),
            "{}의 링크가 올바르지 않음: {}",
            exchange.name,
            exchange.link
        );
    }
}

#[test]
fn test_error_codes_pairwise_distinct() {
    let catalog = builtin();
    let section = catalog.section(SectionKey::Errors).unwrap();

    let SectionPayload::Errors(list) = &section.payload else {
        panic!("errors 페이로드가 아님");
    };

    let codes: HashSet<&str> = list.items.iter().map(|e| e.error.as_str()).collect();
    assert_eq!(codes.len(), list.items.len());
}

#[test]
fn test_builtin_catalog_validates_clean() {
    assert!(builtin().validate().is_empty());
}

#[test]
fn test_injected_duplicate_num_reported_once() {
    // 정상 콘텐츠에서 단계 번호 하나를 중복으로 망가뜨린다
    let mut sections = guide_core::builtin_sections();
    let quick_start = sections
        .iter_mut()
        .find(|s| s.key == SectionKey::QuickStart)
        .unwrap();
    match &mut quick_start.payload {
        SectionPayload::Steps(list) => list.steps[2].num = 2,
        other => panic!("quickStart 페이로드가 아님: {}", other.kind()),
    }

    let issues = guide_core::validate_sections(&sections);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].section, SectionKey::QuickStart);
    assert_eq!(issues[0].kind, IssueKind::DuplicateStepNum);
    assert!(issues[0].message.contains('2'));

    // 같은 콘텐츠로는 카탈로그 구성도 거부된다
    assert!(matches!(
        GuideCatalog::new(sections),
        Err(GuideError::Construction(_))
    ));
}

#[test]
fn test_unknown_key_is_recoverable() {
    let catalog = builtin();

    let err = catalog.get_section("doesNotExist").unwrap_err();
    assert!(matches!(err, GuideError::NotFound { ref key } if key == "doesNotExist"));
    assert!(!err.is_fatal());

    // 실패한 조회가 카탈로그를 훼손하지 않음
    assert!(catalog.get_section("faq").is_ok());
    assert_eq!(catalog.list_sections(), SectionKey::ALL);
}

#[test]
fn test_lookup_is_value_stable() {
    let catalog = builtin();

    let first = catalog.section(SectionKey::Faq).unwrap().clone();
    let second = catalog.section(SectionKey::Faq).unwrap();
    assert_eq!(&first, second);
}

#[test]
fn test_content_only_catalog_issue_does_not_block_construction() {
    // 빈 필수 필드는 내용상 결함: validate는 보고하되 구성은 허용
    let section = Section::new(
        SectionKey::QuickStart,
        "🚀 빠른 시작 가이드",
        SectionPayload::Steps(StepList::new(vec![Step::new(1, "", "설명")])),
    );

    let catalog = GuideCatalog::new(vec![section]).unwrap();
    let issues = catalog.validate();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::EmptyField);
}
