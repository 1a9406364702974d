// ==========================================
// 航空运营决策系统 - 航班领域模型
// ==========================================
// 职责: 航班计划快照 (单批次内只读)
// ==========================================

use crate::domain::types::FlightStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Flight - 航班
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,                // 航班号
    pub route: String,                    // 航线 ORIGIN-DEST
    pub aircraft_id: String,              // 机号
    #[serde(default)]
    pub aircraft_type: Option<String>,    // 机型 (缺省取配置 default_aircraft_type)
    #[serde(default)]
    pub scheduled_departure: Option<NaiveDateTime>,
    #[serde(default)]
    pub scheduled_arrival: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: FlightStatus,             // 航班状态 (缺省 UNKNOWN)
    #[serde(default)]
    pub current_delay: u32,               // 当前延误(分钟)
    #[serde(default)]
    pub runway_queue: u32,                // 跑道排队(分钟)
    #[serde(default)]
    pub boarding_time_minutes: u32,       // 登机耗时(分钟)
    #[serde(default)]
    pub gate: Option<String>,             // 登机口
}

impl Flight {
    /// 拆分航线为 (起飞机场, 到达机场)
    ///
    /// # 规则
    /// - 按 '-' 切分,取前两段
    /// - 不含 '-' 或任一段为空 → None (调用方跳过航线相关检查)
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        split_route(&self.route)
    }
}

/// 拆分航线字符串
pub fn split_route(route: &str) -> Option<(&str, &str)> {
    let mut parts = route.split('-');
    let origin = parts.next()?.trim();
    let destination = parts.next()?.trim();
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some((origin, destination))
}
