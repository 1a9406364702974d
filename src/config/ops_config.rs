// ==========================================
// 航空运营决策系统 - 航司运营配置
// ==========================================
// 职责: 阈值表 / 机组规则 / 机型表 / 客座缺省系数
// 缺省: 各节缺失时回落到 Default 实现 (与历史 airline_config.json 一致)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::crew::CrewRequirement;
use crate::domain::flight::Flight;
use crate::domain::types::SizeClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 配置文件缺省文件名
pub const CONFIG_FILE_NAME: &str = "airline_config.json";

// ==========================================
// AirlineInfo - 航司信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    pub name: String,
    pub code: String,
    pub hub_airport: String,
}

impl Default for AirlineInfo {
    fn default() -> Self {
        Self {
            name: "Global Airlines".to_string(),
            code: "GA".to_string(),
            hub_airport: "DEL".to_string(),
        }
    }
}

// ==========================================
// Thresholds - 规则阈值表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub crosswind_max_knots: f64,
    pub visibility_min_meters: f64,
    pub engine_thrust_deviation_percent: f64,
    pub runway_queue_max_minutes: u32,
    pub boarding_max_minutes: u32,
    pub turbulence_threshold: f64,
    pub engine_vibration_threshold: f64,
    pub fuel_burn_threshold_percent: f64,
    pub cabin_temp_max_celsius: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            crosswind_max_knots: 40.0,
            visibility_min_meters: 1500.0,
            engine_thrust_deviation_percent: 20.0,
            runway_queue_max_minutes: 25,
            boarding_max_minutes: 45,
            turbulence_threshold: 5.0,
            engine_vibration_threshold: 7.0,
            fuel_burn_threshold_percent: 15.0,
            cabin_temp_max_celsius: 28.0,
        }
    }
}

// ==========================================
// ReusePolicy - 机组复用策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReusePolicy {
    /// 同一批次内机组可出现在多个航班名单上 (历史行为)
    #[default]
    LenientReuse,
    /// 选中即占用,后续扫描与后续航班均跳过
    StrictExclusive,
}

impl fmt::Display for ReusePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReusePolicy::LenientReuse => write!(f, "lenient_reuse"),
            ReusePolicy::StrictExclusive => write!(f, "strict_exclusive"),
        }
    }
}

// ==========================================
// CrewRules - 机组执勤规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewRules {
    pub max_duty_hours: f64,
    pub min_rest_hours: f64,
    pub max_consecutive_flights: usize,
    pub required_crew_per_flight: BTreeMap<SizeClass, CrewRequirement>,
    pub reuse_policy: ReusePolicy,
}

impl Default for CrewRules {
    fn default() -> Self {
        let mut required = BTreeMap::new();
        required.insert(SizeClass::Small, CrewRequirement { pilots: 2, crew: 4 });
        required.insert(SizeClass::Medium, CrewRequirement { pilots: 2, crew: 6 });
        required.insert(SizeClass::Large, CrewRequirement { pilots: 3, crew: 8 });

        Self {
            max_duty_hours: 14.0,
            min_rest_hours: 10.0,
            max_consecutive_flights: 4,
            required_crew_per_flight: required,
            reuse_policy: ReusePolicy::LenientReuse,
        }
    }
}

// ==========================================
// AircraftTypeSpec - 机型参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftTypeSpec {
    #[serde(rename = "type")]
    pub size_class: SizeClass,
    pub capacity: u32,
    #[serde(default)]
    pub range_km: Option<u32>,
}

fn default_aircraft_types() -> BTreeMap<String, AircraftTypeSpec> {
    let entries = [
        ("A320", SizeClass::Medium, 180, 6100),
        ("B737", SizeClass::Medium, 178, 6285),
        ("A380", SizeClass::Large, 555, 15700),
        ("ATR72", SizeClass::Small, 78, 1530),
    ];
    entries
        .into_iter()
        .map(|(code, size_class, capacity, range_km)| {
            (
                code.to_string(),
                AircraftTypeSpec {
                    size_class,
                    capacity,
                    range_km: Some(range_km),
                },
            )
        })
        .collect()
}

// ==========================================
// LoadDefaults - 客座预测缺省系数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubLoadFactor {
    pub airports: Vec<String>,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadDefaults {
    /// 按顺序匹配航线端点,首个命中生效
    pub hub_factors: Vec<HubLoadFactor>,
    /// 无枢纽命中时的缺省客座率
    pub fallback_factor: f64,
    /// 有客座记录但无历史量时的客座率
    pub no_history_factor: f64,
    /// 每条记录取最近 N 个历史量
    pub history_window: usize,
    /// 订座超过预测时的上浮系数
    pub booking_uplift: f64,
}

impl Default for LoadDefaults {
    fn default() -> Self {
        Self {
            hub_factors: vec![
                HubLoadFactor {
                    airports: vec!["DEL".to_string(), "BOM".to_string()],
                    factor: 0.85,
                },
                HubLoadFactor {
                    airports: vec!["LHR".to_string(), "JFK".to_string()],
                    factor: 0.90,
                },
            ],
            fallback_factor: 0.70,
            no_history_factor: 0.70,
            history_window: 7,
            booking_uplift: 1.1,
        }
    }
}

fn default_aircraft_type_code() -> String {
    "A320".to_string()
}

// ==========================================
// OpsConfig - 运营配置根对象
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpsConfig {
    #[serde(default)]
    pub airline: AirlineInfo,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub crew_rules: CrewRules,
    #[serde(default = "default_aircraft_types")]
    pub aircraft_types: BTreeMap<String, AircraftTypeSpec>,
    #[serde(default = "default_aircraft_type_code")]
    pub default_aircraft_type: String,
    #[serde(default)]
    pub load_defaults: LoadDefaults,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            airline: AirlineInfo::default(),
            thresholds: Thresholds::default(),
            crew_rules: CrewRules::default(),
            aircraft_types: default_aircraft_types(),
            default_aircraft_type: default_aircraft_type_code(),
            load_defaults: LoadDefaults::default(),
        }
    }
}

impl OpsConfig {
    // ==========================================
    // 加载
    // ==========================================

    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: OpsConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), aircraft_types = config.aircraft_types.len(), "配置加载完成");
        Ok(config)
    }

    /// 加载配置,文件不存在时使用缺省配置
    ///
    /// 解析失败/校验失败仍返回错误,不静默吞掉
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::from_json_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound(p)) => {
                warn!(path = %p, "配置文件不存在,使用缺省配置");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// 序列化为格式化 JSON
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ==========================================
    // 校验
    // ==========================================

    /// 校验阈值与机组配额
    ///
    /// # 规则
    /// - 数值阈值必须为正
    /// - 每个尺寸分级的飞行员配额 > 0
    /// - 机型表引用的尺寸分级必须有配额
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.thresholds;
        let positives = [
            ("thresholds.crosswind_max_knots", t.crosswind_max_knots),
            ("thresholds.visibility_min_meters", t.visibility_min_meters),
            (
                "thresholds.engine_thrust_deviation_percent",
                t.engine_thrust_deviation_percent,
            ),
            ("thresholds.turbulence_threshold", t.turbulence_threshold),
            ("thresholds.engine_vibration_threshold", t.engine_vibration_threshold),
            ("thresholds.fuel_burn_threshold_percent", t.fuel_burn_threshold_percent),
            ("thresholds.cabin_temp_max_celsius", t.cabin_temp_max_celsius),
            ("crew_rules.max_duty_hours", self.crew_rules.max_duty_hours),
        ];
        for (key, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("必须为正数,实际 {}", value),
                });
            }
        }

        for (size_class, requirement) in &self.crew_rules.required_crew_per_flight {
            if requirement.pilots == 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("crew_rules.required_crew_per_flight.{}", size_class),
                    message: "飞行员配额不能为 0".to_string(),
                });
            }
        }

        for (code, spec) in &self.aircraft_types {
            if !self
                .crew_rules
                .required_crew_per_flight
                .contains_key(&spec.size_class)
            {
                return Err(ConfigError::InvalidValue {
                    key: format!("aircraft_types.{}", code),
                    message: format!("尺寸分级 {} 未配置机组配额", spec.size_class),
                });
            }
        }

        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 航班机型 (缺省取 default_aircraft_type)
    pub fn resolve_aircraft_type<'a>(&'a self, flight: &'a Flight) -> &'a str {
        flight
            .aircraft_type
            .as_deref()
            .unwrap_or(&self.default_aircraft_type)
    }

    pub fn aircraft_spec(&self, aircraft_type: &str) -> Option<&AircraftTypeSpec> {
        self.aircraft_types.get(aircraft_type)
    }

    /// 机型对应的每班机组配额
    ///
    /// 机型未配置或尺寸分级无配额 → None (调用方跳过派班)
    pub fn crew_requirement(&self, aircraft_type: &str) -> Option<CrewRequirement> {
        let spec = self.aircraft_spec(aircraft_type)?;
        self.crew_rules
            .required_crew_per_flight
            .get(&spec.size_class)
            .copied()
    }
}

/// 缺省配置路径: 工作目录下的 airline_config.json,不存在时取用户配置目录
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("flight-ops").join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}
