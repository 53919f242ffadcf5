//! 내장 가이드 콘텐츠.
//!
//! 웹 UI가 표시하는 TwinStar Quantum 가이드 전문입니다.
//! 사용법, 매매법, FAQ, 텔레그램 설정 안내를 섹션 11개로 제공합니다.
//! 여기에는 로직이 없습니다. 문구를 고칠 때는 섹션 키와 단계 번호
//! 불변식을 지켜야 하며, `guide validate`로 전체를 점검할 수 있습니다.

use crate::domain::{
    CapitalGuide, CapitalMode, ErrorItem, ErrorList, FaqItem, FaqList, MethodSet,
    NotificationSpec, NotificationType, OptimizationMode, OptimizationModeSet, ReferralExchange,
    ReferralSet, SeedLock, Step, StepList, Tab, TabList, TelegramStep, TradingMethod,
    WorkflowItem, WorkflowList,
};
use crate::section::{Section, SectionKey, SectionPayload, WarningList};

/// 내장 콘텐츠의 섹션 목록을 선언 순서대로 생성합니다.
pub fn builtin_sections() -> Vec<Section> {
    vec![
        quick_start(),
        workflow(),
        tabs(),
        trading_methods(),
        telegram(),
        referrals(),
        faq(),
        warnings(),
        errors(),
        capital_management(),
        optimization_modes(),
    ]
}

fn quick_start() -> Section {
    let steps = vec![
        Step::new(1, "API 설정", "설정 탭에서 거래소 API 키 등록 및 연결 테스트").with_icon("🔑"),
        Step::new(2, "데이터 수집", "데이터 탭에서 원하는 심볼/기간 데이터 다운로드")
            .with_icon("📥"),
        Step::new(3, "백테스트", "백테스트 탭에서 전략 성과 검증").with_icon("📊"),
        Step::new(4, "파라미터 최적화", "최적화 탭에서 최적의 파라미터 자동 탐색")
            .with_icon("🎯"),
        Step::new(5, "프리셋 적용", "검증된 설정을 프리셋으로 저장").with_icon("💾"),
        Step::new(6, "실매매 시작", "자동매매 탭에서 봇 실행").with_icon("🤖"),
    ];

    Section::new(
        SectionKey::QuickStart,
        "🚀 빠른 시작 가이드",
        SectionPayload::Steps(
            StepList::new(steps).with_note("※ 초기 1회 설정 후에는 6번(매매 시작)만 수행하면 됩니다."),
        ),
    )
}

fn workflow() -> Section {
    let items = vec![
        WorkflowItem::new("API 설정", "거래소 API 키 등록 및 연결 확인", "설정"),
        WorkflowItem::new("데이터 수집", "전략 검증을 위한 과거 캔들 데이터 다운로드", "데이터"),
        WorkflowItem::new("백테스트", "수집된 데이터로 전략의 과거 성과 검정", "백테스트"),
        WorkflowItem::new("최적화", "해당 코인에 가장 잘 맞는 파라미터 찾기", "최적화"),
        WorkflowItem::new("프리셋 적용", "검증된 설정값을 프리셋으로 저장", "최적화"),
        WorkflowItem::new("실매매 시작", "봇을 실행하여 실시간 시그널 매매", "자동매매"),
    ];

    Section::new(
        SectionKey::Workflow,
        "🔄 프로그램 운영 순서",
        SectionPayload::Workflow(WorkflowList::new(items)),
    )
}

fn tabs() -> Section {
    let items = vec![
        Tab::new(
            "📊 매매",
            "실시간 거래 실행, 포지션 관리, 잔고 확인",
            ["단일 거래 (롱/숏)", "활성 포지션 모니터링", "잔고 새로고침"],
        ),
        Tab::new(
            "🔬 백테스트",
            "과거 데이터로 전략 성과 검증",
            ["기간 설정", "레버리지 설정", "수익률/승률/MDD 분석"],
        ),
        Tab::new(
            "🎯 최적화",
            "최적의 파라미터 자동 탐색",
            ["빠른/표준/심층 검색", "MACD/ADX-DI 전략 선택", "프리셋 자동 저장"],
        ),
        Tab::new(
            "⚙️ 설정",
            "API 키, 텔레그램, 테마 설정",
            ["거래소 API 연동", "텔레그램 알림", "다크/라이트 테마"],
        ),
        Tab::new(
            "📜 거래내역",
            "매매 기록 조회 및 분석",
            ["필터링 (기간/심볼)", "손익 통계", "CSV 내보내기"],
        ),
        Tab::new(
            "📥 데이터",
            "과거 캔들 데이터 다운로드",
            ["심볼/기간 선택", "다운로드 진행률", "파일 관리"],
        ),
        Tab::new(
            "🤖 자동매매",
            "다중 코인 자동 매매 봇",
            ["복리/고정 모드", "감시 대상 설정", "실시간 상태 모니터링"],
        ),
    ];

    Section::new(
        SectionKey::Tabs,
        "📑 각 탭 기능",
        SectionPayload::Tabs(TabList::new(items)),
    )
}

fn trading_methods() -> Section {
    let futures = TradingMethod::new("선물 매매 (Bybit/Binance)")
        .with_exchanges(["Bybit", "Binance", "OKX", "Bitget", "BingX"])
        .with_features([
            "롱/숏 양방향 매매",
            "레버리지 사용 가능 (기본 3x)",
            "W 패턴 → 롱 진입",
            "M 패턴 → 숏 진입",
        ])
        .with_param("atrMult", "1.5 (손절)")
        .with_param("trailingStart", "1.0R")
        .with_param("trailingDist", "0.2R")
        .with_param("rsiPeriod", "21")
        .with_tips([
            "포지션당 1-3% 리스크",
            "레버리지 3-5x 권장",
            "최대 레버리지 10x 이하 유지",
        ])
        .with_warnings([
            "청산가 확인 필수",
            "높은 레버리지 = 높은 리스크",
            "변동성 큰 시장 주의",
        ]);

    let spot = TradingMethod::new("현물 매매 (업비트/빗썸)")
        .with_exchanges(["업비트", "빗썸"])
        .with_features([
            "롱만 가능 (매수 → 매도)",
            "레버리지 없음 (1x)",
            "W 패턴만 감지",
            "청산 위험 없음",
        ])
        .with_param("atrMult", "1.5 (손절)")
        .with_param("trailingStart", "1.0R")
        .with_param("trailingDist", "0.2R")
        .with_param("rsiPeriod", "21")
        .with_tips(["매매당 자본금 직접 설정", "기본 100,000원", "분산 투자 권장"])
        .with_warnings([
            "업비트: IP 화이트리스트 필수!",
            "빗썸: 고객인증 완료 필요",
            "하락장에서는 수익 제한적",
        ]);

    Section::new(
        SectionKey::TradingMethods,
        "📈 거래소별 매매법",
        SectionPayload::Methods(MethodSet::new(futures, spot)),
    )
}

fn telegram() -> Section {
    let steps = vec![
        TelegramStep::new(
            1,
            "봇 생성",
            "텔레그램에서 @BotFather 검색 후 대화 시작",
            "/newbot 입력 → 봇 이름 설정",
        ),
        TelegramStep::new(
            2,
            "Bot Token 복사",
            "봇 생성 완료 시 표시되는 토큰 복사",
            "예: 123456789:ABCdefGHIjklMNOpqrsTUVwxyz",
        ),
        TelegramStep::new(
            3,
            "Chat ID 확인",
            "@userinfobot 검색 → /start 입력",
            "표시되는 숫자가 Chat ID (예: 987654321)",
        ),
        TelegramStep::new(
            4,
            "설정 입력",
            "설정 탭에서 Bot Token과 Chat ID 입력",
            "테스트 전송으로 연결 확인 후 저장",
        ),
    ];

    let types = vec![
        NotificationType::new("trade", "💰 진입/청산", "매매 진입 및 청산 시 알림", true),
        NotificationType::new("signal", "📊 신호 감지", "W/M 패턴 신호 발생 시", true),
        NotificationType::new("system", "⚙️ 시스템", "봇 시작/중지/에러 알림", true),
        NotificationType::new("daily", "📈 일일 요약", "매일 23:59 수익 요약", false),
    ];

    Section::new(
        SectionKey::Telegram,
        "📱 텔레그램 알림 설정",
        SectionPayload::Notifications(NotificationSpec::new(steps, types)),
    )
}

fn referrals() -> Section {
    let exchanges = vec![
        ReferralExchange::new(
            "Bybit",
            ["수수료 20% 평생 할인", "최대 $30,000 보너스"],
            "1. 아래 링크로 가입\n2. KYC 인증 완료\n3. 첫 입금 시 보너스 지급",
            "https://www.bybit.com/invite?ref=TWINSTAR",
        ),
        ReferralExchange::new(
            "Binance",
            ["수수료 10% 평생 할인", "BNB 추가 할인"],
            "1. 아래 링크로 가입\n2. 신원 인증 완료\n3. BNB 보유 시 추가 할인",
            "https://www.binance.com/register?ref=TWINSTAR",
        ),
        ReferralExchange::new(
            "OKX",
            ["수수료 20% 할인", "미스터리 박스"],
            "1. 아래 링크로 가입\n2. 거래 시작 시 미스터리 박스 지급",
            "https://www.okx.com/join/TWINSTAR",
        ),
        ReferralExchange::new(
            "업비트",
            ["국내 1위 거래소", "원화 입출금"],
            "1. 업비트 앱 설치\n2. 본인인증 완료\n3. 은행 계좌 연동",
            "https://upbit.com",
        ),
        ReferralExchange::new(
            "빗썸",
            ["국내 거래소", "원화 입출금"],
            "1. 빗썸 앱 설치\n2. 본인인증 완료\n3. 은행 계좌 연동",
            "https://bithumb.com",
        ),
    ];

    Section::new(
        SectionKey::Referrals,
        "🎁 거래소 가입 혜택",
        SectionPayload::Referrals(ReferralSet::new(exchanges)),
    )
}

fn faq() -> Section {
    let items = vec![
        FaqItem::new(
            "라이선스는 어떻게 구매하나요?",
            "앱 실행 시 표시되는 USDT 주소로 $100 입금 후 \"수동 활성화\" 버튼을 클릭하세요.",
        ),
        FaqItem::new(
            "업비트에서 API가 안 되요.",
            "업비트는 고정 IP 등록이 필수입니다. VPS나 고정 IP 서비스를 이용하세요.",
        ),
        FaqItem::new(
            "봇이 매매를 안 해요.",
            "패턴이 감지되지 않으면 대기합니다. W/M 패턴은 자주 발생하지 않으니 인내심을 갖고 기다리세요.",
        ),
        FaqItem::new(
            "손절이 너무 빨라요.",
            "ATR 배수를 조정할 수 있습니다. 기본 1.5에서 2.0으로 늘리면 여유가 생깁니다.",
        ),
        FaqItem::new(
            "테스트넷으로 먼저 해보고 싶어요.",
            "Bybit/Binance는 Testnet 지원합니다. 설정에서 \"Testnet Mode\" 체크하세요.",
        ),
        FaqItem::new(
            "여러 코인을 동시에 거래할 수 있나요?",
            "자동매매 탭에서 감시 대상 수를 설정하면 다중 코인 매매가 가능합니다.",
        ),
        FaqItem::new(
            "수수료는 얼마나 드나요?",
            "거래소 수수료만 발생합니다. 레퍼럴 가입 시 20% 할인 가능!",
        ),
        FaqItem::new(
            "API 연동에 실패합니다.",
            "키 입력 시 앞뒤 공백이 없는지, 거래소에서 API를 생성할 때 \"Trading\" 권한을 주었는지 확인하세요.",
        ),
    ];

    Section::new(
        SectionKey::Faq,
        "❓ 자주 묻는 질문",
        SectionPayload::Faq(FaqList::new(items)),
    )
}

fn warnings() -> Section {
    Section::new(
        SectionKey::Warnings,
        "⚠️ 주의사항",
        SectionPayload::Warnings(WarningList::new([
            "반드시 Testnet에서 먼저 테스트하세요!",
            "투자 금액은 잃어도 되는 금액만 사용하세요!",
            "API 키 권한은 최소한으로 설정 (출금 비활성화)",
            "24시간 봇 운영 시 서버 사용을 권장합니다",
            "과거 성과가 미래 수익을 보장하지 않습니다",
        ])),
    )
}

fn errors() -> Section {
    let items = vec![
        ErrorItem::new(
            "Insufficient Balance",
            "거래소 계좌에 USDT(또는 KRW)가 부족",
            "거래소에 자금 입금 후 재시도",
        ),
        ErrorItem::new(
            "Invalid Signature",
            "API 키 또는 시크릿 키가 부정확",
            "API 키 재확인 및 재입력",
        ),
        ErrorItem::new(
            "Connectivity Error",
            "인터넷 또는 거래소 서버 상태 불안정",
            "네트워크 확인 후 재시도",
        ),
        ErrorItem::new(
            "Position Not Found",
            "청산하려는 포지션이 이미 없음",
            "거래소에서 포지션 상태 확인",
        ),
        ErrorItem::new(
            "Rate Limit Exceeded",
            "API 호출 횟수 초과",
            "잠시 대기 후 재시도 (보통 1분)",
        ),
    ];

    Section::new(
        SectionKey::Errors,
        "❌ 주요 에러 해결",
        SectionPayload::Errors(ErrorList::new(items)),
    )
}

fn capital_management() -> Section {
    let modes = vec![
        CapitalMode::new(
            "복리 모드",
            "📈",
            "현재 잔고 기준으로 거래",
            "수익이 나면 다음 거래 금액도 증가, 손실 시 감소",
            "초기 $100 → 10% 수익 → 다음 거래 $110 기준",
        ),
        CapitalMode::new(
            "고정 모드",
            "📊",
            "초기 시드 기준으로 거래",
            "수익/손실과 관계없이 항상 동일한 금액으로 거래",
            "초기 $100 설정 → 항상 $100 기준 거래",
        ),
    ];

    let lock = SeedLock::new(
        "🔒 시드 잠금",
        "잠금 시 초기 시드를 변경할 수 없습니다",
        "실수로 시드를 변경하는 것을 방지합니다",
    );

    Section::new(
        SectionKey::CapitalManagement,
        "💰 자본 관리 모드",
        SectionPayload::CapitalModes(CapitalGuide::new(modes, lock)),
    )
}

fn optimization_modes() -> Section {
    let modes = vec![
        OptimizationMode::new("빠른 검색", "~36개", "~2분", "핵심 파라미터만 빠르게 검색"),
        OptimizationMode::new("표준 검색", "~3,600개", "~20분", "권장되는 밸런스 있는 검색"),
        OptimizationMode::new("심층 검색", "~12,800개", "~1시간", "매우 정밀한 파라미터 탐색"),
        OptimizationMode::new("순차 검색", "~135개", "~5분", "4단계 자동 순차 최적화"),
    ];

    Section::new(
        SectionKey::OptimizationModes,
        "🎯 최적화 검색 모드",
        SectionPayload::OptimizationModes(OptimizationModeSet::new(modes)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sections_declared_order() {
        let keys: Vec<SectionKey> = builtin_sections().iter().map(|s| s.key).collect();
        assert_eq!(keys, SectionKey::ALL);
    }

    #[test]
    fn test_builtin_content_is_clean() {
        let issues = crate::validate::validate_sections(&builtin_sections());
        assert!(issues.is_empty(), "검증 이슈: {:?}", issues);
    }
}
