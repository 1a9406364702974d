// ==========================================
// 航空运营决策系统 - 机体健康规则引擎
// ==========================================
// 职责: 由单机最新发动机日志生成健康告警
// 输入: 最新 EngineLogEntry + 阈值表
// 输出: Vec<HealthAlert>,并逐条写入告警日志
// 红线: 规则相互独立,同一条日志可触发多条告警
// ==========================================

use crate::config::OpsConfig;
use crate::domain::risk::{AircraftAlerts, AlertReading, FleetAlerts, HealthAlert};
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::telemetry::EngineLogEntry;
use crate::domain::types::{AlertSeverity, AlertType, LogStatus};
use crate::engine::alert_log::AlertSink;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ===== 固定阈值 =====
pub const VIBRATION_CRITICAL: f64 = 8.0;
pub const FUEL_BURN_BASELINE_KG_HR: f64 = 2500.0;
pub const OIL_TEMP_WARNING_C: f64 = 110.0;
pub const OIL_TEMP_CRITICAL_C: f64 = 115.0;
pub const THRUST_DEVIATION_CRITICAL: f64 = 25.0;

// ==========================================
// HealthRuleEvaluator - 机体健康规则引擎
// ==========================================
pub struct HealthRuleEvaluator {
    config: Arc<OpsConfig>,
    sink: Arc<dyn AlertSink>,
}

impl HealthRuleEvaluator {
    pub fn new(config: Arc<OpsConfig>, sink: Arc<dyn AlertSink>) -> Self {
        Self { config, sink }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 全机队健康巡检
    ///
    /// 每个机号只看最新一条日志 (快照已保证倒序)
    ///
    /// # 返回
    /// (机号 → 分组告警, 全机队分组告警)
    #[instrument(skip(self, snapshot), fields(engine_logs = snapshot.engine_logs().len()))]
    pub fn monitor_fleet(
        &self,
        snapshot: &OpsSnapshot,
        evaluated_at: NaiveDateTime,
    ) -> (BTreeMap<String, AircraftAlerts>, FleetAlerts) {
        let mut by_aircraft = BTreeMap::new();
        let mut fleet = FleetAlerts::default();

        for aircraft_id in snapshot.aircraft_ids() {
            let Some(latest) = snapshot.latest_engine_log(aircraft_id) else {
                continue;
            };

            let mut grouped = AircraftAlerts::default();
            for alert in self.evaluate(latest, evaluated_at) {
                fleet.push(alert.clone());
                grouped.push(alert);
            }
            by_aircraft.insert(aircraft_id.to_string(), grouped);
        }

        info!(
            aircraft = by_aircraft.len(),
            critical = fleet.critical.len(),
            warning = fleet.warning.len(),
            "机队健康巡检完成"
        );

        (by_aircraft, fleet)
    }

    /// 评估单条日志并落盘
    ///
    /// 落盘失败只记录 warn,告警照常返回
    pub fn evaluate(&self, log: &EngineLogEntry, evaluated_at: NaiveDateTime) -> Vec<HealthAlert> {
        let alerts = self.analyze(log, evaluated_at);

        for alert in &alerts {
            if let Err(e) = self.sink.append(alert) {
                warn!(
                    aircraft_id = %alert.aircraft_id,
                    alert_type = %alert.alert_type,
                    severity = %alert.severity,
                    error = %e,
                    "告警日志写入失败"
                );
            }
        }

        alerts
    }

    /// 规则评估 (纯函数,无落盘)
    ///
    /// # 规则
    /// - 振动 > 阈值 → ENGINE_VIBRATION (>8.0 为 CRITICAL)
    /// - 油耗偏离基准 2500 kg/hr 的百分比 > 阈值 → FUEL_BURN_ANOMALY (WARNING)
    /// - 滑油温度 > 110 → OIL_TEMPERATURE (>115 为 CRITICAL)
    /// - 推力偏差 |100 - thrust| > 阈值 → ENGINE_THRUST (>25 为 CRITICAL)
    /// - 客舱温度 > 上限 → CABIN_TEMPERATURE (WARNING)
    /// - 颠簸 > 阈值 → TURBULENCE (WARNING)
    /// - 日志状态位 WARNING → SYSTEM_WARNING (WARNING)
    ///
    /// 缺省读数: 推力 100,其余 0
    pub fn analyze(&self, log: &EngineLogEntry, evaluated_at: NaiveDateTime) -> Vec<HealthAlert> {
        let thresholds = &self.config.thresholds;
        let metrics = &log.metrics;
        let mut alerts = Vec::new();

        let mut push = |alert_type: AlertType, message: String, severity: AlertSeverity, reading: AlertReading| {
            alerts.push(HealthAlert {
                aircraft_id: log.aircraft_id.clone(),
                alert_type,
                message,
                severity,
                reading,
                timestamp: evaluated_at,
            });
        };

        // 振动
        let vibration = metrics.engine_vibration.unwrap_or(0.0);
        if vibration > thresholds.engine_vibration_threshold {
            push(
                AlertType::EngineVibration,
                format!("High engine vibration: {:.1}", vibration),
                escalate(vibration > VIBRATION_CRITICAL),
                AlertReading::Numeric {
                    value: vibration,
                    threshold: thresholds.engine_vibration_threshold,
                },
            );
        }

        // 油耗
        let fuel_burn = metrics.fuel_burn_rate.unwrap_or(0.0);
        let fuel_deviation =
            (fuel_burn - FUEL_BURN_BASELINE_KG_HR).abs() / FUEL_BURN_BASELINE_KG_HR * 100.0;
        if fuel_deviation > thresholds.fuel_burn_threshold_percent {
            push(
                AlertType::FuelBurnAnomaly,
                format!("Abnormal fuel burn: {:.0} kg/hr", fuel_burn),
                AlertSeverity::Warning,
                AlertReading::Numeric {
                    value: fuel_deviation,
                    threshold: thresholds.fuel_burn_threshold_percent,
                },
            );
        }

        // 滑油温度
        let oil_temp = metrics.oil_temperature.unwrap_or(0.0);
        if oil_temp > OIL_TEMP_WARNING_C {
            push(
                AlertType::OilTemperature,
                format!("High oil temperature: {:.1}C", oil_temp),
                escalate(oil_temp > OIL_TEMP_CRITICAL_C),
                AlertReading::Numeric {
                    value: oil_temp,
                    threshold: OIL_TEMP_WARNING_C,
                },
            );
        }

        // 推力
        let thrust = metrics.engine_thrust_percent.unwrap_or(100.0);
        let thrust_deviation = (100.0 - thrust).abs();
        if thrust_deviation > thresholds.engine_thrust_deviation_percent {
            push(
                AlertType::EngineThrust,
                format!("Engine thrust deviation: {:.1}%", thrust),
                escalate(thrust_deviation > THRUST_DEVIATION_CRITICAL),
                AlertReading::Numeric {
                    value: thrust_deviation,
                    threshold: thresholds.engine_thrust_deviation_percent,
                },
            );
        }

        // 客舱温度
        let cabin_temp = metrics.cabin_temperature_c.unwrap_or(0.0);
        if cabin_temp > thresholds.cabin_temp_max_celsius {
            push(
                AlertType::CabinTemperature,
                format!("High cabin temperature: {:.1}C", cabin_temp),
                AlertSeverity::Warning,
                AlertReading::Numeric {
                    value: cabin_temp,
                    threshold: thresholds.cabin_temp_max_celsius,
                },
            );
        }

        // 颠簸
        let turbulence = metrics.turbulence_level.unwrap_or(0.0);
        if turbulence > thresholds.turbulence_threshold {
            push(
                AlertType::Turbulence,
                format!("High turbulence level: {:.1}", turbulence),
                AlertSeverity::Warning,
                AlertReading::Numeric {
                    value: turbulence,
                    threshold: thresholds.turbulence_threshold,
                },
            );
        }

        // 状态位
        if log.status == LogStatus::Warning {
            push(
                AlertType::SystemWarning,
                "Aircraft system warning flag detected".to_string(),
                AlertSeverity::Warning,
                AlertReading::StatusFlag {
                    observed: LogStatus::Warning,
                    expected: LogStatus::Normal,
                },
            );
        }

        debug!(aircraft_id = %log.aircraft_id, alerts = alerts.len(), "健康规则评估完成");
        alerts
    }
}

fn escalate(critical: bool) -> AlertSeverity {
    if critical {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    }
}
