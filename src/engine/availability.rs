// ==========================================
// 航空运营决策系统 - 机组可派判定
// ==========================================
// 职责: 单个机组成员是否满足执勤/休息/连飞/状态约束
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::config::CrewRules;
use crate::domain::crew::CrewMember;
use crate::domain::types::CrewStatus;
use std::fmt;

// ==========================================
// UnavailableReason - 不可派原因
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum UnavailableReason {
    DutyHoursExceeded { duty_hours: f64, max_duty_hours: f64 },
    InsufficientRest { rest_hours: f64, min_rest_hours: f64 },
    ConsecutiveFlightLimit { assigned: usize, max_consecutive: usize },
    StatusNotAvailable(CrewStatus),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::DutyHoursExceeded {
                duty_hours,
                max_duty_hours,
            } => write!(f, "DUTY_HOURS_EXCEEDED: {:.1} > {:.1}", duty_hours, max_duty_hours),
            UnavailableReason::InsufficientRest {
                rest_hours,
                min_rest_hours,
            } => write!(f, "INSUFFICIENT_REST: {:.1} < {:.1}", rest_hours, min_rest_hours),
            UnavailableReason::ConsecutiveFlightLimit {
                assigned,
                max_consecutive,
            } => write!(f, "CONSECUTIVE_FLIGHT_LIMIT: {} >= {}", assigned, max_consecutive),
            UnavailableReason::StatusNotAvailable(status) => {
                write!(f, "STATUS_NOT_AVAILABLE: {}", status)
            }
        }
    }
}

// ==========================================
// AvailabilityFilter - 纯函数工具类
// ==========================================
pub struct AvailabilityFilter;

impl AvailabilityFilter {
    /// 判定机组成员是否可派
    ///
    /// # 规则 (任一成立即不可派,按顺序短路)
    /// 1. duty_hours_today > max_duty_hours
    /// 2. rest_hours_remaining < min_rest_hours
    /// 3. assigned_flights 数量 >= max_consecutive_flights
    /// 4. status != AVAILABLE
    pub fn is_available(crew: &CrewMember, rules: &CrewRules) -> bool {
        Self::rejection_reason(crew, rules).is_none()
    }

    /// 返回首个不满足的规则 (可派时为 None)
    pub fn rejection_reason(crew: &CrewMember, rules: &CrewRules) -> Option<UnavailableReason> {
        if crew.duty_hours_today > rules.max_duty_hours {
            return Some(UnavailableReason::DutyHoursExceeded {
                duty_hours: crew.duty_hours_today,
                max_duty_hours: rules.max_duty_hours,
            });
        }

        if crew.rest_hours_remaining < rules.min_rest_hours {
            return Some(UnavailableReason::InsufficientRest {
                rest_hours: crew.rest_hours_remaining,
                min_rest_hours: rules.min_rest_hours,
            });
        }

        if crew.assigned_flights.len() >= rules.max_consecutive_flights {
            return Some(UnavailableReason::ConsecutiveFlightLimit {
                assigned: crew.assigned_flights.len(),
                max_consecutive: rules.max_consecutive_flights,
            });
        }

        if crew.status != CrewStatus::Available {
            return Some(UnavailableReason::StatusNotAvailable(crew.status));
        }

        None
    }
}
