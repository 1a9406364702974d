// ==========================================
// 航空运营决策系统 - 领域模型层
// ==========================================
// 职责: 定义输入记录、派生结果与闭合枚举
// 红线: 不含 I/O 逻辑,不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod crew;
pub mod flight;
pub mod load;
pub mod risk;
pub mod snapshot;
pub mod telemetry;
pub mod types;

// 重导出核心类型
pub use assignment::{AssignedCrew, Assignment, ComplianceVerdict};
pub use crew::{CrewMember, CrewRequirement};
pub use flight::{split_route, Flight};
pub use load::{LoadPrediction, PassengerLoadRecord};
pub use risk::{
    AircraftAlerts, AlertLogLine, AlertReading, DelayPrediction, FleetAlerts, HealthAlert,
    RouteSuggestion,
};
pub use snapshot::OpsSnapshot;
pub use telemetry::{EngineLogEntry, EngineMetrics, WeatherData, WeatherLogEntry};
pub use types::{
    AlertSeverity, AlertType, CrewRole, CrewStatus, DelaySeverity, FlightStatus, LoadStatus,
    LogStatus, RouteRiskLevel, SizeClass, WeatherCondition,
};
