//! 섹션 단건 출력.

use anyhow::Context;
use guide_core::GuideCatalog;

use super::sections::entry_count;

/// 단건 출력 설정.
pub struct ShowConfig {
    /// 섹션 키 (예: quickStart)
    pub section: String,
    /// JSON으로 출력할지 여부
    pub json: bool,
}

/// 섹션 하나를 출력합니다.
///
/// 알 수 없는 키는 에러로 보고될 뿐, 카탈로그에는 영향이 없습니다.
pub fn show_section(catalog: &GuideCatalog, config: ShowConfig) -> anyhow::Result<()> {
    let section = catalog.get_section(&config.section)?;

    if config.json {
        let json = serde_json::to_string_pretty(section).context("섹션 직렬화 실패")?;
        println!("{}", json);
    } else {
        println!("\n{}", section.title);
        println!("키: {}", section.key);
        println!("종류: {}", section.payload.kind());
        println!("항목 수: {}", entry_count(&section.payload));
    }

    Ok(())
}
