// ==========================================
// 航空运营决策系统 - 延误风险聚合引擎
// ==========================================
// 职责: 天气 + 维修 + 运行三类信号累加为延误分钟与等级
// 输入: 航班 + 批次快照
// 输出: DelayPrediction
// 红线: 三类检查顺序固定 (只影响原因顺序,不影响总分钟)
// ==========================================

use crate::config::OpsConfig;
use crate::domain::flight::Flight;
use crate::domain::risk::DelayPrediction;
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::types::{DelaySeverity, LogStatus, WeatherCondition};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

// ===== 固定加时 (分钟) =====
pub const CROSSWIND_DELAY_MIN: u32 = 45;
pub const THUNDERSTORM_DELAY_MIN: u32 = 90;
pub const LOW_VISIBILITY_DELAY_MIN: u32 = 30;
pub const THRUST_DEVIATION_DELAY_MIN: u32 = 60;
pub const MAINTENANCE_WARNING_DELAY_MIN: u32 = 30;
pub const LOW_CABIN_PRESSURE_DELAY_MIN: u32 = 45;
pub const BOARDING_DELAY_MIN: u32 = 30;
pub const CREW_SHORTAGE_DELAY_MIN: u32 = 60;

// ===== 固定阈值 (不可配置) =====
pub const CABIN_PRESSURE_MIN_PSI: f64 = 10.8;
/// 全批次 AVAILABLE 人数低于此值即判定机组短缺
pub const MIN_AVAILABLE_CREW: usize = 6;

/// 单类信号结果: (加时分钟, 原因)
type Signal = (u32, Vec<String>);

// ==========================================
// DelayRiskAggregator - 延误风险聚合引擎
// ==========================================
pub struct DelayRiskAggregator {
    config: Arc<OpsConfig>,
}

impl DelayRiskAggregator {
    pub fn new(config: Arc<OpsConfig>) -> Self {
        Self { config }
    }

    /// 批次内全部航班的延误预测
    pub fn predict_all(&self, snapshot: &OpsSnapshot) -> BTreeMap<String, DelayPrediction> {
        snapshot
            .flights()
            .iter()
            .map(|flight| (flight.flight_id.clone(), self.predict(flight, snapshot)))
            .collect()
    }

    /// 单航班延误预测
    #[instrument(skip(self, flight, snapshot), fields(flight_id = %flight.flight_id))]
    pub fn predict(&self, flight: &Flight, snapshot: &OpsSnapshot) -> DelayPrediction {
        // 跑道排队分钟直接计入,累加一律饱和
        let mut predicted_delay: u32 = 0;
        let mut reasons = Vec::new();

        // 1. 天气
        let (weather_delay, weather_reasons) = self.weather_signals(flight, snapshot);
        predicted_delay = predicted_delay.saturating_add(weather_delay);
        reasons.extend(weather_reasons);

        // 2. 维修
        let (maint_delay, maint_reasons) = self.maintenance_signals(flight, snapshot);
        predicted_delay = predicted_delay.saturating_add(maint_delay);
        reasons.extend(maint_reasons);

        // 3. 运行
        let (op_delay, op_reasons) = self.operational_signals(flight, snapshot);
        predicted_delay = predicted_delay.saturating_add(op_delay);
        reasons.extend(op_reasons);

        let severity = DelaySeverity::from_minutes(predicted_delay);
        debug!(predicted_delay, severity = %severity, "延误预测完成");

        DelayPrediction {
            flight_id: flight.flight_id.clone(),
            route: flight.route.clone(),
            predicted_delay,
            reasons,
            severity,
        }
    }

    // ==========================================
    // 信号计算
    // ==========================================

    /// 天气信号: 起降两端各取最新气象,三项独立累加
    fn weather_signals(&self, flight: &Flight, snapshot: &OpsSnapshot) -> Signal {
        let mut delay = 0;
        let mut reasons = Vec::new();
        let thresholds = &self.config.thresholds;

        let Some((origin, destination)) = flight.endpoints() else {
            debug!(route = %flight.route, "航线格式无效,跳过天气检查");
            return (delay, reasons);
        };

        for airport in [origin, destination] {
            let Some(weather) = snapshot.latest_weather(airport) else {
                continue;
            };

            if weather.crosswind_knots > thresholds.crosswind_max_knots {
                delay += CROSSWIND_DELAY_MIN;
                reasons.push(format!("High crosswind at {}", airport));
            }

            if weather.weather_data.conditions == WeatherCondition::Thunderstorm {
                delay += THUNDERSTORM_DELAY_MIN;
                reasons.push(format!("Thunderstorm at {}", airport));
            }

            if weather.weather_data.visibility_meters < thresholds.visibility_min_meters {
                delay += LOW_VISIBILITY_DELAY_MIN;
                reasons.push(format!("Low visibility at {}", airport));
            }
        }

        (delay, reasons)
    }

    /// 维修信号: 取该机号最新发动机日志
    fn maintenance_signals(&self, flight: &Flight, snapshot: &OpsSnapshot) -> Signal {
        let mut delay = 0;
        let mut reasons = Vec::new();

        let Some(log) = snapshot.latest_engine_log(&flight.aircraft_id) else {
            return (delay, reasons);
        };

        if let Some(thrust) = log.metrics.engine_thrust_percent {
            let deviation = (100.0 - thrust).abs();
            if deviation > self.config.thresholds.engine_thrust_deviation_percent {
                delay += THRUST_DEVIATION_DELAY_MIN;
                reasons.push(format!("Engine thrust deviation: {:.1}%", deviation));
            }
        }

        if log.status == LogStatus::Warning {
            delay += MAINTENANCE_WARNING_DELAY_MIN;
            reasons.push("Aircraft maintenance warning".to_string());
        }

        if let Some(pressure) = log.metrics.cabin_pressure_psi {
            if pressure < CABIN_PRESSURE_MIN_PSI {
                delay += LOW_CABIN_PRESSURE_DELAY_MIN;
                reasons.push(format!("Low cabin pressure: {:.1} psi", pressure));
            }
        }

        (delay, reasons)
    }

    /// 运行信号: 跑道排队 / 登机 / 全局机组短缺
    fn operational_signals(&self, flight: &Flight, snapshot: &OpsSnapshot) -> Signal {
        let mut delay = 0;
        let mut reasons = Vec::new();
        let thresholds = &self.config.thresholds;

        if flight.runway_queue > thresholds.runway_queue_max_minutes {
            delay = flight.runway_queue;
            reasons.push(format!("Runway queue: {} min", flight.runway_queue));
        }

        if flight.boarding_time_minutes > thresholds.boarding_max_minutes {
            delay = delay.saturating_add(BOARDING_DELAY_MIN);
            reasons.push(format!("Boarding delay: {} min", flight.boarding_time_minutes));
        }

        if snapshot.available_crew_count() < MIN_AVAILABLE_CREW {
            delay = delay.saturating_add(CREW_SHORTAGE_DELAY_MIN);
            reasons.push("Crew shortage".to_string());
        }

        (delay, reasons)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crew::CrewMember;
    use crate::domain::telemetry::{EngineLogEntry, EngineMetrics, WeatherData, WeatherLogEntry};
    use crate::domain::types::{CrewRole, CrewStatus, FlightStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 20)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn flight(route: &str) -> Flight {
        Flight {
            flight_id: "GA101".to_string(),
            route: route.to_string(),
            aircraft_id: "GA-001".to_string(),
            aircraft_type: Some("A320".to_string()),
            scheduled_departure: None,
            scheduled_arrival: None,
            status: FlightStatus::Scheduled,
            current_delay: 0,
            runway_queue: 10,
            boarding_time_minutes: 30,
            gate: None,
        }
    }

    fn available_crew(n: usize) -> Vec<CrewMember> {
        (0..n)
            .map(|i| CrewMember {
                crew_id: format!("C{}", 1000 + i),
                name: format!("Crew {}", i),
                role: CrewRole::Attendant,
                duty_hours_today: 0.0,
                rest_hours_remaining: 12.0,
                assigned_flights: vec![],
                status: CrewStatus::Available,
                current_location: None,
            })
            .collect()
    }

    fn weather(airport: &str, conditions: WeatherCondition, crosswind: f64, vis: f64) -> WeatherLogEntry {
        WeatherLogEntry {
            airport: airport.to_string(),
            timestamp: ts(8),
            weather_data: WeatherData {
                conditions,
                visibility_meters: vis,
                temperature_c: None,
                wind_speed_knots: None,
                wind_direction: None,
                humidity_percent: None,
                pressure_hpa: None,
            },
            crosswind_knots: crosswind,
        }
    }

    fn aggregator() -> DelayRiskAggregator {
        DelayRiskAggregator::new(Arc::new(OpsConfig::default()))
    }

    #[test]
    fn test_clean_flight_has_no_delay() {
        let snapshot = OpsSnapshot::new(vec![flight("DEL-LHR")], available_crew(6), vec![], vec![], vec![]);
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);

        assert_eq!(prediction.predicted_delay, 0);
        assert!(prediction.reasons.is_empty());
        assert_eq!(prediction.severity, DelaySeverity::None);
    }

    #[test]
    fn test_thunderstorm_and_crosswind_at_origin() {
        let snapshot = OpsSnapshot::new(
            vec![flight("DEL-LHR")],
            available_crew(6),
            vec![],
            vec![weather("DEL", WeatherCondition::Thunderstorm, 50.0, 5000.0)],
            vec![],
        );
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);

        assert_eq!(prediction.predicted_delay, 135);
        assert_eq!(
            prediction.reasons,
            vec!["High crosswind at DEL", "Thunderstorm at DEL"]
        );
        assert_eq!(prediction.severity, DelaySeverity::High);
    }

    #[test]
    fn test_only_latest_weather_counts() {
        let mut stale = weather("LHR", WeatherCondition::Fog, 10.0, 300.0);
        stale.timestamp = ts(1);
        let snapshot = OpsSnapshot::new(
            vec![flight("DEL-LHR")],
            available_crew(6),
            vec![],
            vec![stale, weather("LHR", WeatherCondition::Clear, 10.0, 9000.0)],
            vec![],
        );
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);

        assert_eq!(prediction.predicted_delay, 0);
    }

    #[test]
    fn test_maintenance_signals() {
        let log = EngineLogEntry {
            aircraft_id: "GA-001".to_string(),
            flight_id: None,
            timestamp: ts(9),
            metrics: EngineMetrics {
                engine_thrust_percent: Some(70.0),
                cabin_pressure_psi: Some(10.5),
                ..EngineMetrics::default()
            },
            status: LogStatus::Warning,
        };
        let snapshot = OpsSnapshot::new(vec![flight("DEL-LHR")], available_crew(6), vec![log], vec![], vec![]);
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);

        assert_eq!(prediction.predicted_delay, 60 + 30 + 45);
        assert_eq!(prediction.reasons[0], "Engine thrust deviation: 30.0%");
        assert_eq!(prediction.reasons[1], "Aircraft maintenance warning");
        assert_eq!(prediction.reasons[2], "Low cabin pressure: 10.5 psi");
    }

    #[test]
    fn test_operational_signals_and_crew_shortage() {
        let mut f = flight("DEL-LHR");
        f.runway_queue = 32;
        f.boarding_time_minutes = 50;
        let snapshot = OpsSnapshot::new(vec![f], available_crew(5), vec![], vec![], vec![]);
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);

        assert_eq!(prediction.predicted_delay, 32 + 30 + 60);
        assert_eq!(
            prediction.reasons,
            vec!["Runway queue: 32 min", "Boarding delay: 50 min", "Crew shortage"]
        );
    }

    #[test]
    fn test_malformed_route_skips_weather() {
        let snapshot = OpsSnapshot::new(
            vec![flight("DELLHR")],
            available_crew(6),
            vec![],
            vec![weather("DEL", WeatherCondition::Thunderstorm, 55.0, 100.0)],
            vec![],
        );
        let prediction = aggregator().predict(&snapshot.flights()[0], &snapshot);
        assert_eq!(prediction.predicted_delay, 0);
    }
}
