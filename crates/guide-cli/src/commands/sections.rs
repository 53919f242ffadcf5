//! 섹션 목록 출력.

use guide_core::{GuideCatalog, SectionPayload};

/// 섹션 키와 제목을 선언 순서대로 출력합니다.
pub fn print_section_list(catalog: &GuideCatalog) {
    println!("\n가이드 섹션 ({}개):", catalog.len());
    for section in catalog.sections() {
        println!(
            "  {:<20} {:<10} {}",
            section.key,
            entry_count_label(&section.payload),
            section.title
        );
    }
}

fn entry_count_label(payload: &SectionPayload) -> String {
    format!("{}건", entry_count(payload))
}

/// 페이로드의 항목 수를 셉니다.
pub fn entry_count(payload: &SectionPayload) -> usize {
    match payload {
        SectionPayload::Steps(list) => list.steps.len(),
        SectionPayload::Workflow(list) => list.items.len(),
        SectionPayload::Tabs(list) => list.items.len(),
        SectionPayload::Methods(_) => 2,
        SectionPayload::Notifications(spec) => spec.steps.len() + spec.types.len(),
        SectionPayload::Referrals(set) => set.exchanges.len(),
        SectionPayload::Faq(list) => list.items.len(),
        SectionPayload::Warnings(list) => list.items.len(),
        SectionPayload::Errors(list) => list.items.len(),
        SectionPayload::CapitalModes(guide) => guide.modes.len(),
        SectionPayload::OptimizationModes(set) => set.modes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_count_builtin() {
        let catalog = GuideCatalog::builtin().unwrap();

        let faq = catalog.get_section("faq").unwrap();
        assert_eq!(entry_count(&faq.payload), 8);

        let telegram = catalog.get_section("telegram").unwrap();
        assert_eq!(entry_count(&telegram.payload), 8); // 단계 4 + 알림 유형 4
    }
}
