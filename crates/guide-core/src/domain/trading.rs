//! 거래소별 매매법 설명.
//!
//! 선물/현물 매매법 각각의 특징, 파라미터, 팁, 주의사항을 정의합니다.
//! 파라미터 값은 실행 가능한 설정이 아니라 표시용 문자열입니다.

use serde::{Deserialize, Serialize};

/// 표시용 파라미터 한 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    /// 파라미터 이름 (예: atrMult)
    pub name: String,

    /// 표시용 값 (예: "1.5 (손절)")
    pub value: String,
}

impl MethodParam {
    /// 새 표시용 파라미터를 생성합니다.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 하나의 매매법 (선물 또는 현물).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingMethod {
    /// 매매법 이름
    pub name: String,

    /// 지원 거래소 (표시 순서)
    pub exchanges: Vec<String>,

    /// 특징 목록
    pub features: Vec<String>,

    /// 표시용 파라미터 (표시 순서 유지)
    pub params: Vec<MethodParam>,

    /// 운용 팁
    pub tips: Vec<String>,

    /// 주의사항
    pub warnings: Vec<String>,
}

impl TradingMethod {
    /// 새 매매법을 생성합니다.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exchanges: Vec::new(),
            features: Vec::new(),
            params: Vec::new(),
            tips: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// 지원 거래소를 설정합니다.
    pub fn with_exchanges<I, S>(mut self, exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    /// 특징 목록을 설정합니다.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// 표시용 파라미터를 추가합니다.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(MethodParam::new(name, value));
        self
    }

    /// 운용 팁을 설정합니다.
    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }

    /// 주의사항을 설정합니다.
    pub fn with_warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings = warnings.into_iter().map(Into::into).collect();
        self
    }
}

/// 선물/현물 매매법 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSet {
    /// 선물 매매법
    pub futures: TradingMethod,

    /// 현물 매매법
    pub spot: TradingMethod,
}

impl MethodSet {
    /// 새 매매법 집합을 생성합니다.
    pub fn new(futures: TradingMethod, spot: TradingMethod) -> Self {
        Self { futures, spot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trading_method_builder() {
        let method = TradingMethod::new("선물 매매 (Bybit/Binance)")
            .with_exchanges(["Bybit", "Binance"])
            .with_param("atrMult", "1.5 (손절)")
            .with_param("rsiPeriod", "21")
            .with_tips(["포지션당 1-3% 리스크"]);

        assert_eq!(method.exchanges.len(), 2);
        assert_eq!(method.params[1].name, "rsiPeriod");
        assert_eq!(method.params[1].value, "21");
        assert!(method.warnings.is_empty());
    }
}
