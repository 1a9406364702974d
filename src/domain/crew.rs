// ==========================================
// 航空运营决策系统 - 机组领域模型
// ==========================================
// 职责: 机组成员快照
// 红线: 引擎只读,派班不回写 assigned_flights
// ==========================================

use crate::domain::types::{CrewRole, CrewStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// CrewMember - 机组成员
// ==========================================
// 缺省字段取宽松值 (0 / 0 / 空),不完整记录可能被判为可派
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub crew_id: String,
    pub name: String,
    pub role: CrewRole,
    #[serde(default)]
    pub duty_hours_today: f64,        // 当日已执勤小时
    #[serde(default)]
    pub rest_hours_remaining: f64,    // 剩余休息小时
    #[serde(default)]
    pub assigned_flights: Vec<String>, // 已排航班
    pub status: CrewStatus,
    #[serde(default)]
    pub current_location: Option<String>,
}

impl CrewMember {
    pub fn is_status_available(&self) -> bool {
        self.status == CrewStatus::Available
    }
}

// ==========================================
// CrewRequirement - 每班机组配额
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRequirement {
    pub pilots: usize, // 飞行员
    pub crew: usize,   // 客舱乘务
}
