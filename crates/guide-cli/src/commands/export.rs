//! 카탈로그 JSON 내보내기.

use std::fs;

use anyhow::Context;
use guide_core::GuideCatalog;

/// 내보내기 설정.
pub struct ExportConfig {
    /// 출력 파일 경로 (지정하지 않으면 stdout)
    pub output: Option<String>,
    /// 들여쓰기 포함 여부
    pub pretty: bool,
}

/// 카탈로그 전체를 JSON으로 내보냅니다.
pub fn export_catalog(catalog: &GuideCatalog, config: ExportConfig) -> anyhow::Result<()> {
    let json = if config.pretty {
        serde_json::to_string_pretty(catalog)
    } else {
        serde_json::to_string(catalog)
    }
    .context("카탈로그 직렬화 실패")?;

    match config.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("파일 저장 실패: {}", path))?;
            println!("\n내보내기 완료: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
