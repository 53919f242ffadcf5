//! 텔레그램 알림 설정 안내.
//!
//! 알림 채널을 연결하는 단계별 안내와 알림 유형 목록을 정의합니다.
//! 실제 메시지 전송은 알림 모듈의 책임이며, 여기에는 표시용 텍스트만 있습니다.

use serde::{Deserialize, Serialize};

use super::step::TelegramStep;

/// 알림 유형 한 건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationType {
    /// 유형 키 (목록 내 유일, 예: trade)
    #[serde(rename = "type")]
    pub kind: String,

    /// 표시 라벨
    pub label: String,

    /// 설명
    pub desc: String,

    /// 기본 활성화 여부
    pub default: bool,
}

impl NotificationType {
    /// 새 알림 유형을 생성합니다.
    pub fn new(
        kind: impl Into<String>,
        label: impl Into<String>,
        desc: impl Into<String>,
        default: bool,
    ) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            desc: desc.into(),
            default,
        }
    }
}

/// 텔레그램 설정 안내 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    /// 설정 단계 (표시 순서)
    pub steps: Vec<TelegramStep>,

    /// 알림 유형 목록
    #[serde(rename = "notificationTypes")]
    pub types: Vec<NotificationType>,
}

impl NotificationSpec {
    /// 새 텔레그램 안내를 생성합니다.
    pub fn new(steps: Vec<TelegramStep>, types: Vec<NotificationType>) -> Self {
        Self { steps, types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_wire_name() {
        let ty = NotificationType::new("daily", "📈 일일 요약", "매일 23:59 수익 요약", false);
        let json = serde_json::to_value(&ty).unwrap();

        // 원본 데이터의 필드명을 그대로 유지
        assert_eq!(json["type"], "daily");
        assert_eq!(json["default"], false);
    }
}
