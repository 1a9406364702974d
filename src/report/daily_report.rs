// ==========================================
// 航空运营决策系统 - 运营日报
// ==========================================
// 职责: 将批次结果渲染为 8 节纯文本日报并写入输出目录
// 文件: aviation_report_<YYYY-MM-DD>.txt
// 说明: 各节列表只展示前若干条,完整数据见 BatchResult
// ==========================================

use crate::config::OpsConfig;
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::types::{DelaySeverity, FlightStatus, LoadStatus, RouteRiskLevel};
use crate::engine::orchestrator::BatchResult;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const RULE_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 40;

// ===== 各节展示条数 =====
const CURRENT_DELAY_LIMIT: usize = 5;
const DELAY_GROUP_LIMIT: usize = 3;
const DELAY_REASON_LIMIT: usize = 2;
const NON_COMPLIANT_LIMIT: usize = 5;
const OVERBOOKING_LIMIT: usize = 3;
const CRITICAL_ALERT_LIMIT: usize = 3;
const HIGH_ROUTE_LIMIT: usize = 3;

/// 日报文件名
pub fn report_file_name(report_date: NaiveDate) -> String {
    format!("aviation_report_{}.txt", report_date.format("%Y-%m-%d"))
}

// ==========================================
// DailyReport - 运营日报
// ==========================================
pub struct DailyReport<'a> {
    config: &'a OpsConfig,
    snapshot: &'a OpsSnapshot,
    result: &'a BatchResult,
    report_date: NaiveDate,
}

impl<'a> DailyReport<'a> {
    pub fn new(
        config: &'a OpsConfig,
        snapshot: &'a OpsSnapshot,
        result: &'a BatchResult,
        report_date: NaiveDate,
    ) -> Self {
        Self {
            config,
            snapshot,
            result,
            report_date,
        }
    }

    /// 写入输出目录 (目录不存在时创建)
    ///
    /// # 返回
    /// 日报文件路径
    pub fn write_to(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(report_file_name(self.report_date));
        fs::write(&path, self.render())?;

        info!(path = %path.display(), "运营日报已生成");
        Ok(path)
    }

    /// 渲染完整日报
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=".repeat(RULE_WIDTH));
        lines.push("AVIATION OPERATIONS DAILY REPORT".to_string());
        lines.push(format!("Date: {}", self.report_date.format("%Y-%m-%d")));
        lines.push(format!(
            "Airline: {} ({})",
            self.config.airline.name, self.config.airline.code
        ));
        lines.push("=".repeat(RULE_WIDTH));
        lines.push(String::new());

        self.executive_summary(&mut lines);
        self.flight_operations(&mut lines);
        self.delay_predictions(&mut lines);
        self.crew_scheduling(&mut lines);
        self.passenger_loads(&mut lines);
        self.aircraft_health(&mut lines);
        self.route_analysis(&mut lines);
        self.recommendations(&mut lines);

        lines.push(String::new());
        lines.push("=".repeat(RULE_WIDTH));
        lines.push("END OF REPORT".to_string());
        lines.push("=".repeat(RULE_WIDTH));

        lines.join("\n")
    }

    // ==========================================
    // 各节渲染
    // ==========================================

    fn section(lines: &mut Vec<String>, title: &str) {
        lines.push(title.to_string());
        lines.push("-".repeat(SECTION_WIDTH));
    }

    fn executive_summary(&self, lines: &mut Vec<String>) {
        Self::section(lines, "1. EXECUTIVE SUMMARY");

        let delayed = self
            .result
            .flights
            .values()
            .filter(|a| a.delay.predicted_delay > 0)
            .count();

        lines.push(format!("Total Flights Monitored: {}", self.snapshot.flights().len()));
        lines.push(format!("Flights with Predicted Delays: {}", delayed));
        lines.push(format!(
            "Critical Aircraft Alerts: {}",
            self.result.fleet_alerts.critical.len()
        ));
        lines.push(format!("Warning Alerts: {}", self.result.fleet_alerts.warning.len()));
        lines.push(String::new());
    }

    fn flight_operations(&self, lines: &mut Vec<String>) {
        Self::section(lines, "2. FLIGHT OPERATIONS");

        let flights = self.snapshot.flights();
        if !flights.is_empty() {
            // 按首次出现顺序统计
            let mut status_count: Vec<(FlightStatus, usize)> = Vec::new();
            for flight in flights {
                match status_count.iter_mut().find(|(s, _)| *s == flight.status) {
                    Some((_, count)) => *count += 1,
                    None => status_count.push((flight.status.clone(), 1)),
                }
            }
            for (status, count) in status_count {
                lines.push(format!("{}: {}", status, count));
            }

            let current_delays: Vec<_> = flights.iter().filter(|f| f.current_delay > 0).collect();
            if !current_delays.is_empty() {
                lines.push(format!("Currently Delayed Flights: {}", current_delays.len()));
                for flight in current_delays.iter().take(CURRENT_DELAY_LIMIT) {
                    lines.push(format!(
                        "  {}: {} min delay",
                        flight.flight_id, flight.current_delay
                    ));
                }
            }
        }
        lines.push(String::new());
    }

    fn delay_predictions(&self, lines: &mut Vec<String>) {
        Self::section(lines, "3. DELAY PREDICTIONS");

        for severity in [DelaySeverity::High, DelaySeverity::Medium, DelaySeverity::Low] {
            let group: Vec<_> = self
                .result
                .flights
                .values()
                .map(|a| &a.delay)
                .filter(|d| d.severity == severity)
                .collect();
            if group.is_empty() {
                continue;
            }

            lines.push(format!("{} Severity Delays ({} flights):", severity, group.len()));
            for prediction in group.iter().take(DELAY_GROUP_LIMIT) {
                lines.push(format!(
                    "  {}: {} min - {}",
                    prediction.flight_id, prediction.predicted_delay, prediction.route
                ));
                if !prediction.reasons.is_empty() {
                    let shown: Vec<&str> = prediction
                        .reasons
                        .iter()
                        .take(DELAY_REASON_LIMIT)
                        .map(|r| r.as_str())
                        .collect();
                    lines.push(format!("    Reasons: {}", shown.join(", ")));
                }
            }
        }
        lines.push(String::new());
    }

    fn crew_scheduling(&self, lines: &mut Vec<String>) {
        Self::section(lines, "4. CREW SCHEDULING");

        let assessed = self.result.assessed_crew_count();
        if assessed > 0 {
            lines.push(format!(
                "Compliant Assignments: {}/{}",
                self.result.compliant_count(),
                assessed
            ));

            let non_compliant: Vec<(&String, &Vec<String>)> = self
                .result
                .flights
                .iter()
                .filter_map(|(id, a)| a.compliance.as_ref().map(|c| (id, c)))
                .filter(|(_, c)| !c.compliant)
                .map(|(id, c)| (id, &c.issues))
                .collect();

            if !non_compliant.is_empty() {
                lines.push(format!("Non-Compliant Flights ({}):", non_compliant.len()));
                for (flight_id, issues) in non_compliant.iter().take(NON_COMPLIANT_LIMIT) {
                    lines.push(format!("  {}: {}", flight_id, issues.join(", ")));
                }
            }
        }
        lines.push(String::new());
    }

    fn passenger_loads(&self, lines: &mut Vec<String>) {
        Self::section(lines, "5. PASSENGER LOAD PREDICTIONS");

        let predictions = &self.result.load_predictions;
        if !predictions.is_empty() {
            let total_capacity: u64 = predictions.values().map(|p| u64::from(p.capacity)).sum();
            let total_predicted: u64 = predictions.values().map(|p| u64::from(p.predicted_load)).sum();

            if total_capacity > 0 {
                let load_factor = total_predicted as f64 / total_capacity as f64;
                lines.push(format!("Overall Load Factor: {:.1}%", load_factor * 100.0));
                lines.push(format!("Total Predicted Passengers: {}", total_predicted));
                lines.push(format!("Total Available Capacity: {}", total_capacity));
            }

            let overbooking: Vec<_> = predictions
                .iter()
                .filter(|(_, p)| p.status == LoadStatus::OverbookingRisk)
                .collect();
            if !overbooking.is_empty() {
                lines.push(format!("Overbooking Risk ({} flights):", overbooking.len()));
                for (flight_id, p) in overbooking.iter().take(OVERBOOKING_LIMIT) {
                    lines.push(format!("  {}: {}/{} seats", flight_id, p.predicted_load, p.capacity));
                }
            }
        }
        lines.push(String::new());
    }

    fn aircraft_health(&self, lines: &mut Vec<String>) {
        Self::section(lines, "6. AIRCRAFT HEALTH MONITORING");

        let fleet = &self.result.fleet_alerts;
        lines.push(format!("Critical Alerts: {}", fleet.critical.len()));
        lines.push(format!("Warning Alerts: {}", fleet.warning.len()));

        if !fleet.critical.is_empty() {
            lines.push("Critical Alerts:".to_string());
            for alert in fleet.critical.iter().take(CRITICAL_ALERT_LIMIT) {
                lines.push(format!("  {}: {}", alert.aircraft_id, alert.alert_type));
                lines.push(format!("    {}", alert.message));
            }
        }

        if !fleet.is_empty() {
            let aircraft: BTreeSet<&str> = fleet
                .critical
                .iter()
                .chain(fleet.warning.iter())
                .map(|a| a.aircraft_id.as_str())
                .collect();
            lines.push(format!("Aircraft with Alerts: {}", aircraft.len()));
        }
        lines.push(String::new());
    }

    fn route_analysis(&self, lines: &mut Vec<String>) {
        Self::section(lines, "7. ROUTE ANALYSIS & DIVERSION SUGGESTIONS");

        let suggestions = &self.result.route_suggestions;
        if suggestions.is_empty() {
            lines.push("No major route issues detected.".to_string());
        } else {
            lines.push(format!("Flights with Route Issues: {}", suggestions.len()));

            let high: Vec<_> = suggestions
                .iter()
                .filter(|s| s.severity == RouteRiskLevel::High)
                .collect();
            if !high.is_empty() {
                lines.push(format!("High Severity Issues ({}):", high.len()));
                for s in high.iter().take(HIGH_ROUTE_LIMIT) {
                    lines.push(format!("  {} ({})", s.flight_id, s.route));
                    lines.push(format!("    Issues: {}", s.issues.join(", ")));
                    lines.push(format!("    Suggestion: {}", s.suggestion));
                }
            }
        }
        lines.push(String::new());
    }

    fn recommendations(&self, lines: &mut Vec<String>) {
        Self::section(lines, "8. RECOMMENDATIONS & ACTIONS REQUIRED");

        let mut actions = Vec::new();

        if !self.result.fleet_alerts.critical.is_empty() {
            actions.push("Immediate maintenance required for aircraft with critical alerts".to_string());
        }

        let high_routes = self.result.high_risk_routes();
        if high_routes > 0 {
            actions.push(format!(
                "Review and possibly reschedule {} high-risk flights",
                high_routes
            ));
        }

        let overbooking = self
            .result
            .load_predictions
            .values()
            .filter(|p| p.status == LoadStatus::OverbookingRisk)
            .count();
        if overbooking > 0 {
            actions.push(format!("Manage overbooking for {} flights", overbooking));
        }

        if actions.is_empty() {
            lines.push("No urgent actions required. Operations are running smoothly.".to_string());
        } else {
            for (i, action) in actions.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, action));
            }
        }
    }
}
