//! 가이드 카탈로그 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 섹션 목록 보기
//! guide sections
//!
//! # FAQ 섹션을 JSON으로 출력
//! guide show faq --json
//!
//! # 콘텐츠 불변식 검증 (이슈가 있으면 실패 종료)
//! guide validate
//!
//! # 카탈로그 전체 내보내기
//! guide export --pretty -o guide.json
//! ```

use clap::{Parser, Subcommand};
use tracing::{error, info};

mod commands;

use commands::export::{export_catalog, ExportConfig};
use commands::sections::print_section_list;
use commands::show::{show_section, ShowConfig};
use commands::validate::validate_catalog;
use guide_core::GuideCatalog;

#[derive(Parser)]
#[command(name = "guide")]
#[command(about = "Guide catalog CLI - 트레이딩 봇 가이드 콘텐츠 저작 도구", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 섹션 키와 제목 목록 보기
    Sections,

    /// 섹션 하나를 출력
    Show {
        /// 섹션 키 (예: quickStart, faq)
        section: String,

        /// JSON 형식으로 출력
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 콘텐츠 불변식 전체 검증
    Validate,

    /// 카탈로그 전체를 JSON으로 내보내기
    Export {
        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// 사람이 읽기 좋은 들여쓰기 포함
        #[arg(long, default_value = "false")]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // 트레이싱 초기화
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // 내장 콘텐츠가 깨져 있으면 여기서 기동이 멈춘다
    let catalog = match GuideCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("카탈로그 구성 실패: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Sections => {
            print_section_list(&catalog);
        }

        Commands::Show { section, json } => {
            show_section(&catalog, ShowConfig { section, json })?;
        }

        Commands::Validate => {
            let issue_count = validate_catalog(&catalog);
            if issue_count > 0 {
                error!("Validation failed with {} issues", issue_count);
                return Err(anyhow::anyhow!("검증 이슈 {}건", issue_count));
            }
            info!("✅ Catalog validated successfully");
        }

        Commands::Export { output, pretty } => {
            export_catalog(&catalog, ExportConfig { output, pretty })?;
            info!("✅ Catalog exported successfully");
        }
    }

    Ok(())
}
