// ==========================================
// 航空运营决策系统 - 核心库
// ==========================================
// 职责: 机组派班 / 延误风险 / 机体健康 / 航线风险 / 客座预测
// 系统定位: 决策支持系统 (结论附原因,人工最终决策)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 报表层 - 运营日报
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertSeverity, AlertType, CrewRole, CrewStatus, DelaySeverity, FlightStatus, LoadStatus,
    LogStatus, RouteRiskLevel, SizeClass, WeatherCondition,
};

// 领域实体
pub use domain::{
    AircraftAlerts, Assignment, ComplianceVerdict, CrewMember, CrewRequirement, DelayPrediction,
    EngineLogEntry, Flight, HealthAlert, LoadPrediction, OpsSnapshot, PassengerLoadRecord,
    RouteSuggestion, WeatherLogEntry,
};

// 配置
pub use config::{OpsConfig, ReusePolicy};

// 引擎
pub use engine::{
    AvailabilityFilter, BatchResult, ComplianceChecker, CrewAssigner, CrewPool,
    DelayRiskAggregator, FileAlertLog, HealthRuleEvaluator, LoadForecaster, NoOpAlertSink,
    OpsOrchestrator, RouteRiskAnalyzer,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "航空运营决策系统";
