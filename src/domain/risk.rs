// ==========================================
// 航空运营决策系统 - 风险领域模型
// ==========================================
// 职责: 延误预测 / 健康告警 / 航路建议
// 约束: 每批次从零计算,不跨批次保留
// ==========================================

use crate::domain::types::{AlertSeverity, AlertType, DelaySeverity, LogStatus, RouteRiskLevel};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// DelayPrediction - 延误预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayPrediction {
    pub flight_id: String,
    pub route: String,
    pub predicted_delay: u32,   // 预测延误(分钟)
    pub reasons: Vec<String>,   // 按 天气→维修→运行 顺序
    pub severity: DelaySeverity,
}

// ==========================================
// AlertReading - 告警读数
// ==========================================
// 数值类规则记录 (读数, 阈值); 状态位规则记录 (实际, 期望)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertReading {
    Numeric { value: f64, threshold: f64 },
    StatusFlag { observed: LogStatus, expected: LogStatus },
}

// ==========================================
// HealthAlert - 机体健康告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub aircraft_id: String,
    pub alert_type: AlertType,
    pub message: String,
    pub severity: AlertSeverity,
    pub reading: AlertReading,
    pub timestamp: NaiveDateTime,
}

impl HealthAlert {
    pub fn is_critical(&self) -> bool {
        self.severity == AlertSeverity::Critical
    }
}

/// 告警日志单行记录
#[derive(Debug, Clone, Serialize)]
pub struct AlertLogLine<'a> {
    pub timestamp: NaiveDateTime,
    pub aircraft_id: &'a str,
    pub alert_type: AlertType,
    pub message: &'a str,
    pub severity: AlertSeverity,
}

impl<'a> From<&'a HealthAlert> for AlertLogLine<'a> {
    fn from(alert: &'a HealthAlert) -> Self {
        Self {
            timestamp: alert.timestamp,
            aircraft_id: &alert.aircraft_id,
            alert_type: alert.alert_type,
            message: &alert.message,
            severity: alert.severity,
        }
    }
}

// ==========================================
// AircraftAlerts / FleetAlerts - 告警分组
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftAlerts {
    pub critical: Vec<HealthAlert>,
    pub warning: Vec<HealthAlert>,
}

impl AircraftAlerts {
    /// 按等级归入对应分组
    pub fn push(&mut self, alert: HealthAlert) {
        match alert.severity {
            AlertSeverity::Critical => self.critical.push(alert),
            AlertSeverity::Warning => self.warning.push(alert),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.warning.is_empty()
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len()
    }
}

/// 全机队告警 (与单机结构一致,按机号顺序拼接)
pub type FleetAlerts = AircraftAlerts;

// ==========================================
// RouteSuggestion - 航路风险建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSuggestion {
    pub flight_id: String,
    pub route: String,
    pub issues: Vec<String>,
    pub suggestion: String,
    pub severity: RouteRiskLevel,
}
