// ==========================================
// 航空运营决策系统 - 机组派班引擎
// ==========================================
// 职责: 按配额从候选池贪心填充飞行员/客舱乘务
// 输入: 航班 + 机组池(保持原顺序) + 配额
// 输出: Assignment (不回写 CrewMember)
// 红线: 单次左到右首个命中,不做组合优化
// ==========================================

use crate::config::{OpsConfig, ReusePolicy};
use crate::domain::assignment::{AssignedCrew, Assignment};
use crate::domain::crew::{CrewMember, CrewRequirement};
use crate::domain::flight::Flight;
use crate::domain::types::CrewRole;
use crate::engine::availability::AvailabilityFilter;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// CrewPool - 批次内机组池
// ==========================================
// 下标即身份;reserved[i] 记录被哪个航班占用
// LenientReuse 下从不占用,同一人可出现在多个航班名单
#[derive(Debug, Clone)]
pub struct CrewPool<'a> {
    members: &'a [CrewMember],
    reserved: Vec<Option<String>>,
    policy: ReusePolicy,
}

impl<'a> CrewPool<'a> {
    pub fn new(members: &'a [CrewMember], policy: ReusePolicy) -> Self {
        Self {
            members,
            reserved: vec![None; members.len()],
            policy,
        }
    }

    pub fn policy(&self) -> ReusePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 未被占用的候选 (保持池内顺序)
    pub fn unreserved(&self) -> impl Iterator<Item = (usize, &'a CrewMember)> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(move |(idx, _)| self.reserved[*idx].is_none())
    }

    /// 标记占用 (仅 StrictExclusive 生效)
    fn reserve(&mut self, idx: usize, flight_id: &str) {
        if self.policy == ReusePolicy::StrictExclusive {
            self.reserved[idx] = Some(flight_id.to_string());
        }
    }

    /// 查询机组被哪个航班占用
    pub fn reserved_for(&self, crew_id: &str) -> Option<&str> {
        self.members
            .iter()
            .position(|m| m.crew_id == crew_id)
            .and_then(|idx| self.reserved[idx].as_deref())
    }

    /// 释放某航班占用的全部机组,返回释放人数
    pub fn release_flight(&mut self, flight_id: &str) -> usize {
        let mut released = 0;
        for slot in self.reserved.iter_mut() {
            if slot.as_deref() == Some(flight_id) {
                *slot = None;
                released += 1;
            }
        }
        released
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved.iter().filter(|r| r.is_some()).count()
    }
}

// ==========================================
// CrewAssigner - 机组派班引擎
// ==========================================
pub struct CrewAssigner {
    config: Arc<OpsConfig>,
}

impl CrewAssigner {
    pub fn new(config: Arc<OpsConfig>) -> Self {
        Self { config }
    }

    /// 为单个航班派班
    ///
    /// 规则:
    /// 1) 从池首扫描,角色 ∈ {Pilot, Co-Pilot} 且可派者依序入选,直至满足飞行员配额
    /// 2) 再从池首重新扫描,角色 ∈ {Senior-Attendant, Attendant} 且可派者依序入选
    /// 3) StrictExclusive 下入选即占用,第二轮与后续航班只看剩余候选
    /// 4) 配额为 0 时该轮不选人
    #[instrument(skip(self, flight, pool), fields(
        flight_id = %flight.flight_id,
        pilots_needed = required.pilots,
        crew_needed = required.crew,
        pool_size = pool.len()
    ))]
    pub fn assign(
        &self,
        flight: &Flight,
        pool: &mut CrewPool<'_>,
        required: CrewRequirement,
    ) -> Assignment {
        let pilots = self.fill_quota(flight, pool, required.pilots, CrewRole::is_flight_deck);
        let cabin_crew = self.fill_quota(flight, pool, required.crew, CrewRole::is_cabin);

        let assignment = Assignment::new(
            &flight.flight_id,
            pilots,
            cabin_crew,
            required.pilots,
            required.crew,
        );

        debug!(
            pilots = assignment.pilots.len(),
            cabin_crew = assignment.cabin_crew.len(),
            total = assignment.total_assigned,
            "派班完成"
        );

        assignment
    }

    /// 单轮配额填充
    fn fill_quota(
        &self,
        flight: &Flight,
        pool: &mut CrewPool<'_>,
        quota: usize,
        role_matches: fn(&CrewRole) -> bool,
    ) -> Vec<AssignedCrew> {
        let mut selected: Vec<usize> = Vec::with_capacity(quota);

        if quota > 0 {
            for (idx, member) in pool.unreserved() {
                if !role_matches(&member.role) {
                    continue;
                }
                match AvailabilityFilter::rejection_reason(member, &self.config.crew_rules) {
                    None => {
                        selected.push(idx);
                        if selected.len() >= quota {
                            break;
                        }
                    }
                    Some(reason) => {
                        debug!(crew_id = %member.crew_id, reason = %reason, "机组不可派");
                    }
                }
            }
        }

        selected
            .into_iter()
            .map(|idx| {
                pool.reserve(idx, &flight.flight_id);
                AssignedCrew::from(&pool.members[idx])
            })
            .collect()
    }
}
