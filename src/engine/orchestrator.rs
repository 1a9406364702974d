// ==========================================
// 航空运营决策系统 - 引擎编排器
// ==========================================
// 用途: 对同一批次快照依次执行各规则引擎,汇总为 BatchResult
// 顺序: 派班+合规 → 延误 → 机体健康 → 航线风险 → 客座预测
// 说明: 各引擎互不依赖;唯一的批次内可变状态是 CrewPool
// ==========================================

use crate::config::OpsConfig;
use crate::domain::assignment::{Assignment, ComplianceVerdict};
use crate::domain::crew::CrewRequirement;
use crate::domain::load::LoadPrediction;
use crate::domain::risk::{AircraftAlerts, DelayPrediction, FleetAlerts, RouteSuggestion};
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::types::{DelaySeverity, RouteRiskLevel};
use crate::engine::alert_log::AlertSink;
use crate::engine::compliance::ComplianceChecker;
use crate::engine::crew_assigner::{CrewAssigner, CrewPool};
use crate::engine::delay_risk::DelayRiskAggregator;
use crate::engine::health::HealthRuleEvaluator;
use crate::engine::load_forecast::LoadForecaster;
use crate::engine::route_risk::RouteRiskAnalyzer;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ==========================================
// FlightAssessment - 单航班评估结果
// ==========================================
// 机型未配置时 required_crew/assignment/compliance 均为 None
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightAssessment {
    pub required_crew: Option<CrewRequirement>,
    pub assignment: Option<Assignment>,
    pub compliance: Option<ComplianceVerdict>,
    pub delay: DelayPrediction,
}

// ==========================================
// BatchResult - 批次结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub flights: BTreeMap<String, FlightAssessment>,
    pub aircraft_alerts: BTreeMap<String, AircraftAlerts>,
    pub fleet_alerts: FleetAlerts,
    pub route_suggestions: Vec<RouteSuggestion>,
    pub load_predictions: BTreeMap<String, LoadPrediction>,
    pub evaluated_at: NaiveDateTime,
}

impl BatchResult {
    /// 派班合规的航班数
    pub fn compliant_count(&self) -> usize {
        self.flights
            .values()
            .filter(|a| a.compliance.as_ref().is_some_and(|c| c.compliant))
            .count()
    }

    /// 已派班 (机型已配置) 的航班数
    pub fn assessed_crew_count(&self) -> usize {
        self.flights
            .values()
            .filter(|a| a.assignment.is_some())
            .count()
    }

    /// 预测延误等级为 HIGH 的航班
    pub fn high_delay_flights(&self) -> Vec<&DelayPrediction> {
        self.flights
            .values()
            .map(|a| &a.delay)
            .filter(|d| d.severity == DelaySeverity::High)
            .collect()
    }

    /// 全部航班预测延误均值 (分钟)
    pub fn average_delay(&self) -> f64 {
        if self.flights.is_empty() {
            return 0.0;
        }
        let total: u64 = self
            .flights
            .values()
            .map(|a| u64::from(a.delay.predicted_delay))
            .sum();
        total as f64 / self.flights.len() as f64
    }

    pub fn high_risk_routes(&self) -> usize {
        self.route_suggestions
            .iter()
            .filter(|s| s.severity == RouteRiskLevel::High)
            .count()
    }
}

// ==========================================
// OpsOrchestrator - 引擎编排器
// ==========================================
pub struct OpsOrchestrator {
    config: Arc<OpsConfig>,
    assigner: CrewAssigner,
    delay: DelayRiskAggregator,
    health: HealthRuleEvaluator,
    routes: RouteRiskAnalyzer,
    loads: LoadForecaster,
}

impl OpsOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 运营配置
    /// - sink: 健康告警落盘目标
    pub fn new(config: Arc<OpsConfig>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            assigner: CrewAssigner::new(config.clone()),
            delay: DelayRiskAggregator::new(config.clone()),
            health: HealthRuleEvaluator::new(config.clone(), sink),
            routes: RouteRiskAnalyzer::new(config.clone()),
            loads: LoadForecaster::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &OpsConfig {
        &self.config
    }

    /// 以当前本地时间执行批次
    pub fn run_batch(&self, snapshot: &OpsSnapshot) -> BatchResult {
        self.run_batch_at(snapshot, Local::now().naive_local())
    }

    /// 执行批次评估
    ///
    /// 相同快照 + 相同 evaluated_at 的派生结果完全一致
    #[instrument(skip(self, snapshot), fields(
        flights = snapshot.flights().len(),
        crew = snapshot.crew().len(),
        reuse_policy = %self.config.crew_rules.reuse_policy
    ))]
    pub fn run_batch_at(&self, snapshot: &OpsSnapshot, evaluated_at: NaiveDateTime) -> BatchResult {
        info!("开始执行运营批次评估");

        if snapshot.is_empty() {
            warn!("批次无航班,仅执行机体健康巡检");
        }

        // ==========================================
        // 步骤1: 派班 + 合规 + 延误 (按航班顺序)
        // ==========================================
        debug!("步骤1: 派班与延误预测");
        let mut pool = CrewPool::new(snapshot.crew(), self.config.crew_rules.reuse_policy);
        let mut flights: BTreeMap<String, FlightAssessment> = BTreeMap::new();

        for flight in snapshot.flights() {
            // 航班号重复: 以最后一条为准,先归还前一条占用的机组
            if flights.contains_key(&flight.flight_id) {
                let released = pool.release_flight(&flight.flight_id);
                warn!(flight_id = %flight.flight_id, released, "航班号重复,以最后一条为准");
            }

            let aircraft_type = self.config.resolve_aircraft_type(flight);
            let required_crew = self.config.crew_requirement(aircraft_type);

            let (assignment, compliance) = match required_crew {
                Some(required) => {
                    let assignment = self.assigner.assign(flight, &mut pool, required);
                    let verdict = ComplianceChecker::check(&assignment);
                    (Some(assignment), Some(verdict))
                }
                None => {
                    warn!(flight_id = %flight.flight_id, aircraft_type, "机型未配置,跳过派班");
                    (None, None)
                }
            };

            let delay = self.delay.predict(flight, snapshot);

            flights.insert(
                flight.flight_id.clone(),
                FlightAssessment {
                    required_crew,
                    assignment,
                    compliance,
                    delay,
                },
            );
        }
        info!(
            flights = flights.len(),
            reserved = pool.reserved_count(),
            "派班与延误预测完成"
        );

        // ==========================================
        // 步骤2: 机体健康
        // ==========================================
        debug!("步骤2: 机体健康巡检");
        let (aircraft_alerts, fleet_alerts) = self.health.monitor_fleet(snapshot, evaluated_at);

        // ==========================================
        // 步骤3: 航线风险
        // ==========================================
        debug!("步骤3: 航线风险分析");
        let route_suggestions = self.routes.analyze_all(snapshot);

        // ==========================================
        // 步骤4: 客座预测
        // ==========================================
        debug!("步骤4: 客座预测");
        let load_predictions = self.loads.predict_all(snapshot);

        let result = BatchResult {
            flights,
            aircraft_alerts,
            fleet_alerts,
            route_suggestions,
            load_predictions,
            evaluated_at,
        };

        info!(
            compliant = result.compliant_count(),
            high_delay = result.high_delay_flights().len(),
            critical_alerts = result.fleet_alerts.critical.len(),
            route_suggestions = result.route_suggestions.len(),
            "运营批次评估完成"
        );

        result
    }
}
