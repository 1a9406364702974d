// ==========================================
// OpsConfig 集成测试
// ==========================================
// 测试目标: 验证航司配置文件加载、缺省回落与校验
// ==========================================

use flight_ops_engine::config::{ConfigError, OpsConfig, ReusePolicy};
use flight_ops_engine::domain::types::SizeClass;
use std::fs;

/// 历史系统生成的完整配置 (含本系统不使用的字段)
const LEGACY_CONFIG: &str = r#"{
  "airline": {"name": "Global Airlines", "code": "GA", "hub_airport": "DEL"},
  "thresholds": {
    "crosswind_max_knots": 40,
    "visibility_min_meters": 1500,
    "engine_thrust_deviation_percent": 20,
    "runway_queue_max_minutes": 25,
    "boarding_max_minutes": 45,
    "turbulence_threshold": 5,
    "engine_vibration_threshold": 7.0,
    "altitude_fluctuation_threshold": 3000,
    "fuel_burn_threshold_percent": 15,
    "cabin_temp_max_celsius": 28
  },
  "crew_rules": {
    "max_duty_hours": 14,
    "min_rest_hours": 10,
    "max_consecutive_flights": 4,
    "required_crew_per_flight": {
      "small": {"pilots": 2, "crew": 4},
      "medium": {"pilots": 2, "crew": 6},
      "large": {"pilots": 3, "crew": 8}
    }
  },
  "aircraft_types": {
    "A320": {"type": "medium", "capacity": 180, "range_km": 6100},
    "B737": {"type": "medium", "capacity": 178, "range_km": 6285},
    "A380": {"type": "large", "capacity": 555, "range_km": 15700},
    "ATR72": {"type": "small", "capacity": 78, "range_km": 1530}
  },
  "routes": {
    "domestic": ["DEL-MAA", "DEL-BOM"],
    "international": ["DEL-LHR", "DEL-JFK"]
  }
}"#;

#[test]
fn test_legacy_config_file_matches_defaults() {
    println!("\n=== 测试：历史配置文件加载 ===");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airline_config.json");
    fs::write(&path, LEGACY_CONFIG).unwrap();

    let config = OpsConfig::from_json_file(&path).unwrap();
    let defaults = OpsConfig::default();

    assert_eq!(config.thresholds, defaults.thresholds);
    assert_eq!(config.crew_rules, defaults.crew_rules);
    assert_eq!(config.aircraft_types, defaults.aircraft_types);
    assert_eq!(config.crew_rules.reuse_policy, ReusePolicy::LenientReuse);
    assert_eq!(config.aircraft_types["ATR72"].size_class, SizeClass::Small);

    println!("✓ 历史配置与缺省值一致,未知字段被忽略");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    println!("\n=== 测试：配置文件缺失 ===");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(matches!(
        OpsConfig::from_json_file(&path),
        Err(ConfigError::FileNotFound(_))
    ));
    assert_eq!(OpsConfig::load_or_default(&path).unwrap(), OpsConfig::default());

    println!("✓ 缺失时使用缺省配置");
}

#[test]
fn test_invalid_file_is_not_silently_replaced() {
    println!("\n=== 测试：损坏/无效配置 ===");

    let dir = tempfile::tempdir().unwrap();

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"thresholds\": ").unwrap();
    assert!(matches!(
        OpsConfig::load_or_default(&broken),
        Err(ConfigError::Parse(_))
    ));

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, r#"{"thresholds": {"crosswind_max_knots": 0}}"#).unwrap();
    match OpsConfig::load_or_default(&invalid) {
        Err(ConfigError::InvalidValue { key, .. }) => {
            assert_eq!(key, "thresholds.crosswind_max_knots");
        }
        other => panic!("期望 InvalidValue,实际 {:?}", other),
    }

    println!("✓ 解析失败与校验失败均返回错误");
}

#[test]
fn test_pretty_json_round_trip_keeps_strict_policy() {
    println!("\n=== 测试：配置导出 ===");

    let mut config = OpsConfig::default();
    config.crew_rules.reuse_policy = ReusePolicy::StrictExclusive;

    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"reuse_policy\": \"strict_exclusive\""));
    assert!(json.contains("\"type\": \"large\""));

    let reloaded = OpsConfig::from_json_str(&json).unwrap();
    assert_eq!(reloaded, config);

    println!("✓ 导出后可重新加载");
}
