// ==========================================
// 航空运营决策系统 - 派班结果领域模型
// ==========================================
// 职责: 单航班派班结果 + 合规结论
// ==========================================

use crate::domain::crew::CrewMember;
use crate::domain::types::CrewRole;
use serde::{Deserialize, Serialize};

// ==========================================
// AssignedCrew - 已派机组摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedCrew {
    pub crew_id: String,
    pub name: String,
    pub role: CrewRole,
}

impl From<&CrewMember> for AssignedCrew {
    fn from(member: &CrewMember) -> Self {
        Self {
            crew_id: member.crew_id.clone(),
            name: member.name.clone(),
            role: member.role,
        }
    }
}

// ==========================================
// Assignment - 单航班派班结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub flight_id: String,
    pub pilots: Vec<AssignedCrew>,
    pub cabin_crew: Vec<AssignedCrew>,
    pub has_enough_pilots: bool,
    pub has_enough_crew: bool,
    pub total_assigned: usize, // = pilots.len() + cabin_crew.len()
}

impl Assignment {
    /// 由两轮扫描结果构造,配额判定统一在此完成
    pub fn new(
        flight_id: &str,
        pilots: Vec<AssignedCrew>,
        cabin_crew: Vec<AssignedCrew>,
        pilots_needed: usize,
        crew_needed: usize,
    ) -> Self {
        let has_enough_pilots = pilots.len() >= pilots_needed;
        let has_enough_crew = cabin_crew.len() >= crew_needed;
        let total_assigned = pilots.len() + cabin_crew.len();
        Self {
            flight_id: flight_id.to_string(),
            pilots,
            cabin_crew,
            has_enough_pilots,
            has_enough_crew,
            total_assigned,
        }
    }

    /// 所有已派机组ID (飞行员在前)
    pub fn crew_ids(&self) -> impl Iterator<Item = &str> {
        self.pilots
            .iter()
            .chain(self.cabin_crew.iter())
            .map(|c| c.crew_id.as_str())
    }
}

// ==========================================
// ComplianceVerdict - 合规结论
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    pub compliant: bool,
    pub issues: Vec<String>,
}
