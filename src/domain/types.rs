// ==========================================
// 航空运营决策系统 - 领域类型定义
// ==========================================
// 职责: 角色/状态/等级等闭合枚举
// 红线: 等级与类型一律用枚举表达,禁止散落字符串字面量
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 机组角色 (Crew Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewRole {
    #[serde(rename = "Pilot")]
    Pilot, // 机长
    #[serde(rename = "Co-Pilot")]
    CoPilot, // 副驾驶
    #[serde(rename = "Senior-Attendant", alias = "Senior Attendant")]
    SeniorAttendant, // 乘务长
    #[serde(rename = "Attendant")]
    Attendant, // 乘务员
}

impl CrewRole {
    /// 是否计入飞行员配额
    pub fn is_flight_deck(&self) -> bool {
        matches!(self, CrewRole::Pilot | CrewRole::CoPilot)
    }

    /// 是否计入客舱乘务配额
    pub fn is_cabin(&self) -> bool {
        matches!(self, CrewRole::SeniorAttendant | CrewRole::Attendant)
    }
}

impl fmt::Display for CrewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrewRole::Pilot => write!(f, "Pilot"),
            CrewRole::CoPilot => write!(f, "Co-Pilot"),
            CrewRole::SeniorAttendant => write!(f, "Senior-Attendant"),
            CrewRole::Attendant => write!(f, "Attendant"),
        }
    }
}

// ==========================================
// 机组状态 (Crew Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewStatus {
    Available, // 可派
    OnDuty,    // 执勤中
    Resting,   // 休息中
}

impl fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrewStatus::Available => write!(f, "AVAILABLE"),
            CrewStatus::OnDuty => write!(f, "ON_DUTY"),
            CrewStatus::Resting => write!(f, "RESTING"),
        }
    }
}

// ==========================================
// 航班状态 (Flight Status)
// ==========================================
// 未识别的状态原样保留 (Other),缺省为 Unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    InFlight,
    Delayed,
    Cancelled,
    Landed,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for FlightStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SCHEDULED" => FlightStatus::Scheduled,
            "BOARDING" => FlightStatus::Boarding,
            "DEPARTED" => FlightStatus::Departed,
            "IN_FLIGHT" => FlightStatus::InFlight,
            "DELAYED" => FlightStatus::Delayed,
            "CANCELLED" => FlightStatus::Cancelled,
            "LANDED" => FlightStatus::Landed,
            "UNKNOWN" | "" => FlightStatus::Unknown,
            _ => FlightStatus::Other(raw),
        }
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Scheduled => write!(f, "SCHEDULED"),
            FlightStatus::Boarding => write!(f, "BOARDING"),
            FlightStatus::Departed => write!(f, "DEPARTED"),
            FlightStatus::InFlight => write!(f, "IN_FLIGHT"),
            FlightStatus::Delayed => write!(f, "DELAYED"),
            FlightStatus::Cancelled => write!(f, "CANCELLED"),
            FlightStatus::Landed => write!(f, "LANDED"),
            FlightStatus::Unknown => write!(f, "UNKNOWN"),
            FlightStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// ==========================================
// 发动机日志状态位 (Log Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    #[default]
    Normal,
    Warning,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogStatus::Normal => write!(f, "NORMAL"),
            LogStatus::Warning => write!(f, "WARNING"),
        }
    }
}

// ==========================================
// 天气现象 (Weather Condition)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Fog,
    Thunderstorm,
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCondition::Clear => write!(f, "Clear"),
            WeatherCondition::Cloudy => write!(f, "Cloudy"),
            WeatherCondition::Rain => write!(f, "Rain"),
            WeatherCondition::Fog => write!(f, "Fog"),
            WeatherCondition::Thunderstorm => write!(f, "Thunderstorm"),
        }
    }
}

// ==========================================
// 机型尺寸分级 (Size Class)
// ==========================================
// 决定每班所需飞行员/乘务员人数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Small => write!(f, "small"),
            SizeClass::Medium => write!(f, "medium"),
            SizeClass::Large => write!(f, "large"),
        }
    }
}

// ==========================================
// 延误等级 (Delay Severity)
// ==========================================
// 顺序: NONE < LOW < MEDIUM < HIGH
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelaySeverity {
    None,
    Low,
    Medium,
    High,
}

impl DelaySeverity {
    /// 按预测延误总分钟数分级
    ///
    /// # 规则
    /// - 0 → NONE
    /// - 1..=30 → LOW
    /// - 31..=90 → MEDIUM
    /// - >90 → HIGH
    pub fn from_minutes(total_minutes: u32) -> Self {
        match total_minutes {
            0 => DelaySeverity::None,
            1..=30 => DelaySeverity::Low,
            31..=90 => DelaySeverity::Medium,
            _ => DelaySeverity::High,
        }
    }
}

impl fmt::Display for DelaySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelaySeverity::None => write!(f, "NONE"),
            DelaySeverity::Low => write!(f, "LOW"),
            DelaySeverity::Medium => write!(f, "MEDIUM"),
            DelaySeverity::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 告警等级 (Alert Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 告警类型 (Alert Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    EngineVibration,
    FuelBurnAnomaly,
    OilTemperature,
    EngineThrust,
    CabinTemperature,
    Turbulence,
    SystemWarning,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::EngineVibration => write!(f, "ENGINE_VIBRATION"),
            AlertType::FuelBurnAnomaly => write!(f, "FUEL_BURN_ANOMALY"),
            AlertType::OilTemperature => write!(f, "OIL_TEMPERATURE"),
            AlertType::EngineThrust => write!(f, "ENGINE_THRUST"),
            AlertType::CabinTemperature => write!(f, "CABIN_TEMPERATURE"),
            AlertType::Turbulence => write!(f, "TURBULENCE"),
            AlertType::SystemWarning => write!(f, "SYSTEM_WARNING"),
        }
    }
}

// ==========================================
// 航路风险等级 (Route Risk Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteRiskLevel {
    Medium,
    High,
}

impl fmt::Display for RouteRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteRiskLevel::Medium => write!(f, "MEDIUM"),
            RouteRiskLevel::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 客座率状态 (Load Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadStatus {
    #[serde(rename = "OVERBOOKING RISK")]
    OverbookingRisk,
    #[serde(rename = "HIGH DEMAND")]
    HighDemand,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "UNDER-UTILIZED")]
    UnderUtilized,
    #[serde(rename = "PREDICTED")]
    Predicted, // 无历史数据,按枢纽系数估算
}

impl LoadStatus {
    /// 按客座率分档
    pub fn from_load_factor(load_factor: f64) -> Self {
        if load_factor > 0.95 {
            LoadStatus::OverbookingRisk
        } else if load_factor > 0.8 {
            LoadStatus::HighDemand
        } else if load_factor > 0.6 {
            LoadStatus::Moderate
        } else if load_factor > 0.4 {
            LoadStatus::Low
        } else {
            LoadStatus::UnderUtilized
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::OverbookingRisk => write!(f, "OVERBOOKING RISK"),
            LoadStatus::HighDemand => write!(f, "HIGH DEMAND"),
            LoadStatus::Moderate => write!(f, "MODERATE"),
            LoadStatus::Low => write!(f, "LOW"),
            LoadStatus::UnderUtilized => write!(f, "UNDER-UTILIZED"),
            LoadStatus::Predicted => write!(f, "PREDICTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_severity_cut_points() {
        assert_eq!(DelaySeverity::from_minutes(0), DelaySeverity::None);
        assert_eq!(DelaySeverity::from_minutes(1), DelaySeverity::Low);
        assert_eq!(DelaySeverity::from_minutes(15), DelaySeverity::Low);
        assert_eq!(DelaySeverity::from_minutes(30), DelaySeverity::Low);
        assert_eq!(DelaySeverity::from_minutes(31), DelaySeverity::Medium);
        assert_eq!(DelaySeverity::from_minutes(90), DelaySeverity::Medium);
        assert_eq!(DelaySeverity::from_minutes(91), DelaySeverity::High);
    }

    #[test]
    fn test_crew_role_accepts_both_senior_spellings() {
        let a: CrewRole = serde_json::from_str("\"Senior Attendant\"").unwrap();
        let b: CrewRole = serde_json::from_str("\"Senior-Attendant\"").unwrap();
        assert_eq!(a, CrewRole::SeniorAttendant);
        assert_eq!(b, CrewRole::SeniorAttendant);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"Senior-Attendant\"");
    }

    #[test]
    fn test_load_status_buckets() {
        assert_eq!(LoadStatus::from_load_factor(0.96), LoadStatus::OverbookingRisk);
        assert_eq!(LoadStatus::from_load_factor(0.95), LoadStatus::HighDemand);
        assert_eq!(LoadStatus::from_load_factor(0.7), LoadStatus::Moderate);
        assert_eq!(LoadStatus::from_load_factor(0.5), LoadStatus::Low);
        assert_eq!(LoadStatus::from_load_factor(0.4), LoadStatus::UnderUtilized);
    }

    #[test]
    fn test_flight_status_keeps_unrecognised_text() {
        let known: FlightStatus = serde_json::from_str("\"IN_FLIGHT\"").unwrap();
        assert_eq!(known, FlightStatus::InFlight);

        let raw: FlightStatus = serde_json::from_str("\"ON_TIME\"").unwrap();
        assert_eq!(raw, FlightStatus::Other("ON_TIME".to_string()));
        assert_eq!(raw.to_string(), "ON_TIME");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"ON_TIME\"");

        assert_eq!(FlightStatus::default(), FlightStatus::Unknown);
    }
}
