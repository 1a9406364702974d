// ==========================================
// 航空运营决策系统 - 引擎层
// ==========================================
// 职责: 派班 / 合规 / 延误 / 机体健康 / 航线风险 / 客座预测规则引擎
// 红线: 引擎只读快照,不修改输入记录;每条结论附带原因
// ==========================================

pub mod alert_log;
pub mod availability;
pub mod compliance;
pub mod crew_assigner;
pub mod delay_risk;
pub mod health;
pub mod load_forecast;
pub mod orchestrator;
pub mod route_risk;

// 重导出核心引擎
pub use alert_log::{AlertLogError, AlertSink, FileAlertLog, NoOpAlertSink};
pub use availability::{AvailabilityFilter, UnavailableReason};
pub use compliance::ComplianceChecker;
pub use crew_assigner::{CrewAssigner, CrewPool};
pub use delay_risk::DelayRiskAggregator;
pub use health::HealthRuleEvaluator;
pub use load_forecast::LoadForecaster;
pub use orchestrator::{BatchResult, FlightAssessment, OpsOrchestrator};
pub use route_risk::RouteRiskAnalyzer;
