//! 콘텐츠 검증 명령.

use guide_core::GuideCatalog;

/// 카탈로그의 모든 검증 이슈를 출력하고 건수를 반환합니다.
///
/// 이슈가 있어도 도중에 멈추지 않고 전부 나열합니다.
/// 종료 코드 처리는 호출자(main)의 몫입니다.
pub fn validate_catalog(catalog: &GuideCatalog) -> usize {
    let issues = catalog.validate();

    if issues.is_empty() {
        println!("\n✅ 검증 통과: 이슈 없음");
    } else {
        println!("\n❌ 검증 이슈 {}건:", issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
    }

    issues.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_no_issues() {
        let catalog = GuideCatalog::builtin().unwrap();
        assert_eq!(validate_catalog(&catalog), 0);
    }
}
