// ==========================================
// 航空运营决策系统 - 配置层
// ==========================================
// 职责: 航司配置加载、缺省值、校验
// 存储: airline_config.json
// 约束: 只读配置对象显式传入各引擎,不使用全局状态
// ==========================================

pub mod error;
pub mod ops_config;

// 重导出核心配置
pub use error::{ConfigError, ConfigResult};
pub use ops_config::{
    default_config_path, AircraftTypeSpec, AirlineInfo, CrewRules, HubLoadFactor, LoadDefaults,
    OpsConfig, ReusePolicy, Thresholds,
};
