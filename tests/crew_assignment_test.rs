// ==========================================
// 机组派班 + 合规检查 集成测试
// ==========================================
// 测试目标: 验证首个命中派班、配额判定与合规结论
// 覆盖范围: GA101 满编/缺员场景、可派性过滤、复用策略
// ==========================================

mod helpers;

use flight_ops_engine::config::{OpsConfig, ReusePolicy};
use flight_ops_engine::domain::crew::CrewMember;
use flight_ops_engine::domain::types::{CrewRole, CrewStatus};
use flight_ops_engine::engine::compliance::{
    ISSUE_INSUFFICIENT_CABIN_CREW, ISSUE_INSUFFICIENT_PILOTS, ISSUE_NO_CREW_ASSIGNED,
};
use flight_ops_engine::engine::{AvailabilityFilter, ComplianceChecker, CrewAssigner, CrewPool};
use helpers::test_data_builder::{available_roster, CrewBuilder, FlightBuilder};
use std::collections::HashSet;
use std::sync::Arc;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_assigner() -> (CrewAssigner, Arc<OpsConfig>) {
    let config = Arc::new(OpsConfig::default());
    (CrewAssigner::new(config.clone()), config)
}

fn ga101_requirement(config: &OpsConfig) -> flight_ops_engine::CrewRequirement {
    config
        .crew_requirement("A320")
        .expect("A320 应配置为 medium 机型")
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_ga101_fully_staffed_is_compliant() {
    println!("\n=== 测试：GA101 满编派班 ===");

    let (assigner, config) = create_test_assigner();
    let flight = FlightBuilder::new("GA101", "DEL-LHR").build();
    let roster = available_roster(2, 6);
    let mut pool = CrewPool::new(&roster, ReusePolicy::LenientReuse);

    let required = ga101_requirement(&config);
    assert_eq!(required.pilots, 2);
    assert_eq!(required.crew, 6);

    let assignment = assigner.assign(&flight, &mut pool, required);
    let verdict = ComplianceChecker::check(&assignment);

    println!("  飞行员: {}, 乘务: {}", assignment.pilots.len(), assignment.cabin_crew.len());
    assert!(assignment.has_enough_pilots, "应满足飞行员配额");
    assert!(assignment.has_enough_crew, "应满足乘务配额");
    assert_eq!(assignment.total_assigned, 8);
    assert!(verdict.compliant, "满编应判定为合规");
    assert!(verdict.issues.is_empty());

    println!("✓ 满编派班合规");
}

#[test]
fn test_ga101_single_pilot_reports_insufficient_pilots() {
    println!("\n=== 测试：GA101 仅 1 名可派飞行员 ===");

    let (assigner, config) = create_test_assigner();
    let flight = FlightBuilder::new("GA101", "DEL-LHR").build();
    let roster = available_roster(1, 6);
    let mut pool = CrewPool::new(&roster, ReusePolicy::LenientReuse);

    let assignment = assigner.assign(&flight, &mut pool, ga101_requirement(&config));
    let verdict = ComplianceChecker::check(&assignment);

    assert!(!assignment.has_enough_pilots);
    assert!(assignment.has_enough_crew);
    assert!(!verdict.compliant);
    assert_eq!(verdict.issues, vec![ISSUE_INSUFFICIENT_PILOTS.to_string()]);

    println!("✓ 缺飞行员时只报告 Insufficient pilots");
}

#[test]
fn test_empty_pool_reports_all_issues() {
    println!("\n=== 测试：空机组池 ===");

    let (assigner, config) = create_test_assigner();
    let flight = FlightBuilder::new("GA101", "DEL-LHR").build();
    let roster: Vec<CrewMember> = vec![];
    let mut pool = CrewPool::new(&roster, ReusePolicy::LenientReuse);

    let assignment = assigner.assign(&flight, &mut pool, ga101_requirement(&config));
    let verdict = ComplianceChecker::check(&assignment);

    assert_eq!(assignment.total_assigned, 0);
    assert_eq!(
        verdict.issues,
        vec![
            ISSUE_INSUFFICIENT_PILOTS.to_string(),
            ISSUE_INSUFFICIENT_CABIN_CREW.to_string(),
            ISSUE_NO_CREW_ASSIGNED.to_string(),
        ]
    );

    println!("✓ 三类问题按顺序报告");
}

#[test]
fn test_unavailable_crew_are_skipped() {
    println!("\n=== 测试：不可派机组被跳过 ===");

    let (assigner, _config) = create_test_assigner();
    let flight = FlightBuilder::new("GA101", "DEL-LHR").build();
    let roster = vec![
        CrewBuilder::new("P1", CrewRole::Pilot).duty_hours(14.5).build(),
        CrewBuilder::new("P2", CrewRole::Pilot).rest_hours(9.0).build(),
        CrewBuilder::new("P3", CrewRole::Pilot)
            .flights(&["GA1", "GA2", "GA3", "GA4"])
            .build(),
        CrewBuilder::new("P4", CrewRole::Pilot).status(CrewStatus::Resting).build(),
        CrewBuilder::new("P5", CrewRole::CoPilot).build(),
        CrewBuilder::new("P6", CrewRole::Pilot).duty_hours(14.0).rest_hours(10.0).build(),
        CrewBuilder::new("A1", CrewRole::SeniorAttendant).build(),
    ];
    let mut pool = CrewPool::new(&roster, ReusePolicy::LenientReuse);

    let assignment = assigner.assign(
        &flight,
        &mut pool,
        flight_ops_engine::CrewRequirement { pilots: 2, crew: 1 },
    );

    let ids: Vec<&str> = assignment.crew_ids().collect();
    assert_eq!(ids, vec!["P5", "P6", "A1"], "边界值 (14.0 / 10.0) 仍可派");

    println!("✓ 执勤/休息/连续航段/状态四项过滤生效");
}

#[test]
fn test_availability_monotonic_in_rest_hours() {
    println!("\n=== 测试：休息时间单调性 ===");

    let config = OpsConfig::default();
    let mut previously_available = false;

    for tenths in 0..=200 {
        let rest = f64::from(tenths) / 10.0;
        let member = CrewBuilder::new("P1", CrewRole::Pilot).rest_hours(rest).build();
        let available = AvailabilityFilter::is_available(&member, &config.crew_rules);

        assert!(
            !(previously_available && !available),
            "休息 {} 小时时由可派变为不可派",
            rest
        );
        previously_available = available;
    }
    assert!(previously_available);

    println!("✓ 增加休息时间不会使机组变为不可派");
}

#[test]
fn test_strict_exclusive_never_double_books() {
    println!("\n=== 测试：StrictExclusive 不重复派班 ===");

    let (assigner, config) = create_test_assigner();
    let roster = available_roster(5, 10);
    let mut pool = CrewPool::new(&roster, ReusePolicy::StrictExclusive);
    let required = ga101_requirement(&config);

    let flights: Vec<_> = ["GA101", "GA102", "GA103"]
        .iter()
        .map(|id| FlightBuilder::new(id, "DEL-LHR").build())
        .collect();
    let assignments: Vec<_> = flights
        .iter()
        .map(|f| assigner.assign(f, &mut pool, required))
        .collect();

    let mut seen = HashSet::new();
    for assignment in &assignments {
        for crew_id in assignment.crew_ids() {
            assert!(seen.insert(crew_id.to_string()), "{} 被派往多个航班", crew_id);
        }
    }

    assert!(ComplianceChecker::check(&assignments[0]).compliant);
    assert!(!assignments[1].has_enough_crew, "第二班只剩 4 名乘务");
    assert_eq!(assignments[1].cabin_crew.len(), 4);
    assert_eq!(assignments[2].pilots.len(), 1);
    assert!(assignments[2].cabin_crew.is_empty());
    assert_eq!(pool.reserved_count(), 15);

    println!("✓ 严格独占模式下机组只出现在一个航班");
}

#[test]
fn test_lenient_reuse_matches_historical_behavior() {
    println!("\n=== 测试：LenientReuse 允许复用 ===");

    let (assigner, config) = create_test_assigner();
    let roster = available_roster(2, 6);
    let mut pool = CrewPool::new(&roster, ReusePolicy::LenientReuse);
    let required = ga101_requirement(&config);

    let first = assigner.assign(&FlightBuilder::new("GA101", "DEL-LHR").build(), &mut pool, required);
    let second = assigner.assign(&FlightBuilder::new("GA102", "LHR-DEL").build(), &mut pool, required);

    assert_eq!(first.crew_ids().collect::<Vec<_>>(), second.crew_ids().collect::<Vec<_>>());
    assert!(ComplianceChecker::check(&second).compliant);

    println!("✓ 宽松模式下同一名册可覆盖多个航班");
}
