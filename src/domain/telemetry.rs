// ==========================================
// 航空运营决策系统 - 遥测与气象领域模型
// ==========================================
// 职责: 发动机日志 / 机场气象日志
// 约定: "最新"记录由 OpsSnapshot 在导入时按时间倒序确立
// ==========================================

use crate::domain::types::{LogStatus, WeatherCondition};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// EngineMetrics - 发动机指标集
// ==========================================
// 所有指标可缺省,缺省值由各规则自行决定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineMetrics {
    #[serde(default)]
    pub engine_thrust_percent: Option<f64>,
    #[serde(default)]
    pub engine_vibration: Option<f64>,
    #[serde(default)]
    pub fuel_burn_rate: Option<f64>,       // kg/hr
    #[serde(default)]
    pub oil_temperature: Option<f64>,      // °C
    #[serde(default)]
    pub oil_pressure: Option<f64>,
    #[serde(default)]
    pub cabin_pressure_psi: Option<f64>,
    #[serde(default)]
    pub cabin_temperature_c: Option<f64>,
    #[serde(default)]
    pub turbulence_level: Option<f64>,
}

// ==========================================
// EngineLogEntry - 发动机日志
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineLogEntry {
    pub aircraft_id: String,
    #[serde(default)]
    pub flight_id: Option<String>,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub metrics: EngineMetrics,
    #[serde(default)]
    pub status: LogStatus,
}

// ==========================================
// WeatherData / WeatherLogEntry - 机场气象
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub conditions: WeatherCondition,
    pub visibility_meters: f64,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub wind_speed_knots: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<u16>,
    #[serde(default)]
    pub humidity_percent: Option<f64>,
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLogEntry {
    pub airport: String,
    pub timestamp: NaiveDateTime,
    pub weather_data: WeatherData,
    #[serde(default)]
    pub crosswind_knots: f64,
}
