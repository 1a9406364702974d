// ==========================================
// 航空运营决策系统 - 批次快照
// ==========================================
// 职责: 单批次只读记录集 + "最新记录"索引
// 红线: 发动机/气象日志在构造时按 timestamp 倒序(稳定排序),
//       引擎侧一律取每机号/机场的首条,不再自行排序
// ==========================================

use crate::domain::crew::CrewMember;
use crate::domain::flight::Flight;
use crate::domain::load::PassengerLoadRecord;
use crate::domain::telemetry::{EngineLogEntry, WeatherLogEntry};
use std::collections::{BTreeSet, HashMap};

// ==========================================
// OpsSnapshot - 批次记录集
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct OpsSnapshot {
    flights: Vec<Flight>,
    crew: Vec<CrewMember>,
    engine_logs: Vec<EngineLogEntry>,
    weather_logs: Vec<WeatherLogEntry>,
    passenger_loads: Vec<PassengerLoadRecord>,

    // 机号 / 机场代码 → 最新记录下标
    latest_engine_idx: HashMap<String, usize>,
    latest_weather_idx: HashMap<String, usize>,
}

impl OpsSnapshot {
    /// 构造快照并确立"最新在前"不变量
    pub fn new(
        flights: Vec<Flight>,
        crew: Vec<CrewMember>,
        mut engine_logs: Vec<EngineLogEntry>,
        mut weather_logs: Vec<WeatherLogEntry>,
        passenger_loads: Vec<PassengerLoadRecord>,
    ) -> Self {
        engine_logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        weather_logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut latest_engine_idx = HashMap::new();
        for (idx, log) in engine_logs.iter().enumerate() {
            latest_engine_idx.entry(log.aircraft_id.clone()).or_insert(idx);
        }

        let mut latest_weather_idx = HashMap::new();
        for (idx, log) in weather_logs.iter().enumerate() {
            latest_weather_idx.entry(log.airport.clone()).or_insert(idx);
        }

        Self {
            flights,
            crew,
            engine_logs,
            weather_logs,
            passenger_loads,
            latest_engine_idx,
            latest_weather_idx,
        }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    /// 发动机日志 (已按时间倒序)
    pub fn engine_logs(&self) -> &[EngineLogEntry] {
        &self.engine_logs
    }

    /// 气象日志 (已按时间倒序)
    pub fn weather_logs(&self) -> &[WeatherLogEntry] {
        &self.weather_logs
    }

    pub fn passenger_loads(&self) -> &[PassengerLoadRecord] {
        &self.passenger_loads
    }

    /// 指定机号的最新发动机日志
    pub fn latest_engine_log(&self, aircraft_id: &str) -> Option<&EngineLogEntry> {
        self.latest_engine_idx
            .get(aircraft_id)
            .map(|&idx| &self.engine_logs[idx])
    }

    /// 指定机场的最新气象
    pub fn latest_weather(&self, airport: &str) -> Option<&WeatherLogEntry> {
        self.latest_weather_idx
            .get(airport)
            .map(|&idx| &self.weather_logs[idx])
    }

    /// 有遥测记录的机号 (字典序)
    pub fn aircraft_ids(&self) -> BTreeSet<&str> {
        self.latest_engine_idx.keys().map(|k| k.as_str()).collect()
    }

    /// 指定航线的客座历史 (保持输入顺序)
    pub fn loads_for_route(&self, route: &str) -> Vec<&PassengerLoadRecord> {
        self.passenger_loads
            .iter()
            .filter(|record| record.route == route)
            .collect()
    }

    /// 全批次状态为 AVAILABLE 的机组人数
    pub fn available_crew_count(&self) -> usize {
        self.crew.iter().filter(|c| c.is_status_available()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::EngineMetrics;
    use crate::domain::types::LogStatus;
    use chrono::NaiveDate;

    fn log_at(aircraft_id: &str, hour: u32, status: LogStatus) -> EngineLogEntry {
        EngineLogEntry {
            aircraft_id: aircraft_id.to_string(),
            flight_id: None,
            timestamp: NaiveDate::from_ymd_opt(2026, 1, 20)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            metrics: EngineMetrics::default(),
            status,
        }
    }

    #[test]
    fn test_latest_engine_log_uses_newest_timestamp() {
        let snapshot = OpsSnapshot::new(
            vec![],
            vec![],
            vec![
                log_at("GA-001", 3, LogStatus::Normal),
                log_at("GA-001", 9, LogStatus::Warning),
                log_at("GA-002", 1, LogStatus::Normal),
            ],
            vec![],
            vec![],
        );

        let latest = snapshot.latest_engine_log("GA-001").unwrap();
        assert_eq!(latest.status, LogStatus::Warning);
        assert_eq!(snapshot.engine_logs()[0].timestamp.format("%H").to_string(), "09");
        assert!(snapshot.latest_engine_log("GA-999").is_none());
        assert_eq!(snapshot.aircraft_ids().len(), 2);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let snapshot = OpsSnapshot::new(
            vec![],
            vec![],
            vec![
                log_at("GA-001", 5, LogStatus::Warning),
                log_at("GA-001", 5, LogStatus::Normal),
            ],
            vec![],
            vec![],
        );

        assert_eq!(
            snapshot.latest_engine_log("GA-001").unwrap().status,
            LogStatus::Warning
        );
    }
}
