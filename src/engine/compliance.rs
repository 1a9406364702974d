// ==========================================
// 航空运营决策系统 - 派班合规检查
// ==========================================
// 职责: 由派班结果生成合规结论与问题清单
// 规则: 三项问题互相独立,可同时出现
// ==========================================

use crate::domain::assignment::{Assignment, ComplianceVerdict};

pub const ISSUE_INSUFFICIENT_PILOTS: &str = "Insufficient pilots";
pub const ISSUE_INSUFFICIENT_CABIN_CREW: &str = "Insufficient cabin crew";
pub const ISSUE_NO_CREW_ASSIGNED: &str = "No crew assigned";

pub struct ComplianceChecker;

impl ComplianceChecker {
    /// 生成合规结论
    ///
    /// compliant ⇔ 飞行员足额 ∧ 乘务足额 ∧ 已派人数 > 0
    pub fn check(assignment: &Assignment) -> ComplianceVerdict {
        let mut issues = Vec::new();

        if !assignment.has_enough_pilots {
            issues.push(ISSUE_INSUFFICIENT_PILOTS.to_string());
        }

        if !assignment.has_enough_crew {
            issues.push(ISSUE_INSUFFICIENT_CABIN_CREW.to_string());
        }

        if assignment.total_assigned == 0 {
            issues.push(ISSUE_NO_CREW_ASSIGNED.to_string());
        }

        ComplianceVerdict {
            compliant: issues.is_empty(),
            issues,
        }
    }
}
