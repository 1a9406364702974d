// ==========================================
// 航空运营决策系统 - 航线风险分析
// ==========================================
// 职责: 航线起降两端的最新气象与阈值比对,生成改航/延误建议
// 检查: 起飞端 雷暴 / 侧风超限;到达端 能见度不足
// 输出: RouteSuggestion (无问题的航班不输出)
// ==========================================

use crate::config::OpsConfig;
use crate::domain::flight::Flight;
use crate::domain::risk::RouteSuggestion;
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::types::{RouteRiskLevel, WeatherCondition};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub const ROUTE_SUGGESTION_TEXT: &str = "Consider delay or alternate route";

pub struct RouteRiskAnalyzer {
    config: Arc<OpsConfig>,
}

impl RouteRiskAnalyzer {
    pub fn new(config: Arc<OpsConfig>) -> Self {
        Self { config }
    }

    /// 批次内全部航班 (保持航班顺序)
    #[instrument(skip(self, snapshot), fields(flights = snapshot.flights().len()))]
    pub fn analyze_all(&self, snapshot: &OpsSnapshot) -> Vec<RouteSuggestion> {
        let suggestions: Vec<RouteSuggestion> = snapshot
            .flights()
            .iter()
            .filter_map(|flight| self.analyze(flight, snapshot))
            .collect();

        info!(suggestions = suggestions.len(), "航线风险分析完成");
        suggestions
    }

    /// 单航班航线风险
    pub fn analyze(&self, flight: &Flight, snapshot: &OpsSnapshot) -> Option<RouteSuggestion> {
        let thresholds = &self.config.thresholds;

        let Some((origin, destination)) = flight.endpoints() else {
            debug!(flight_id = %flight.flight_id, route = %flight.route, "航线格式无效,跳过航线检查");
            return None;
        };

        let mut issues = Vec::new();

        if let Some(weather) = snapshot.latest_weather(origin) {
            if weather.weather_data.conditions == WeatherCondition::Thunderstorm {
                issues.push(format!("Thunderstorm at {}", origin));
            }
            if weather.crosswind_knots > thresholds.crosswind_max_knots {
                issues.push(format!("High crosswind at {}", origin));
            }
        }

        if let Some(weather) = snapshot.latest_weather(destination) {
            if weather.weather_data.visibility_meters < thresholds.visibility_min_meters {
                issues.push(format!("Low visibility at {}", destination));
            }
        }

        if issues.is_empty() {
            return None;
        }

        let severity = if issues.iter().any(|issue| issue.contains("Thunderstorm")) {
            RouteRiskLevel::High
        } else {
            RouteRiskLevel::Medium
        };

        debug!(flight_id = %flight.flight_id, issues = issues.len(), severity = %severity, "航线存在风险");

        Some(RouteSuggestion {
            flight_id: flight.flight_id.clone(),
            route: flight.route.clone(),
            issues,
            suggestion: ROUTE_SUGGESTION_TEXT.to_string(),
            severity,
        })
    }
}
