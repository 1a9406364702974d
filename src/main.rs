// ==========================================
// 航空运营决策系统 - 批处理入口
// ==========================================
// 用法:
//   flight-ops [data_dir] [config_path] [output_dir]
// 缺省: data / airline_config.json (不存在时查用户配置目录) / output/reports
// 告警日志写入工作目录下 logs/
// ==========================================

use anyhow::Context;
use chrono::Local;
use flight_ops_engine::config::{default_config_path, OpsConfig};
use flight_ops_engine::engine::{FileAlertLog, OpsOrchestrator};
use flight_ops_engine::importer::SnapshotLoader;
use flight_ops_engine::logging;
use flight_ops_engine::report::DailyReport;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_OUTPUT_DIR: &str = "output/reports";
const ALERT_LOG_DIR: &str = "logs";

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()));
    let config_path = args.next().map(PathBuf::from).unwrap_or_else(default_config_path);
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()));

    tracing::info!("==================================================");
    tracing::info!("{} v{}", flight_ops_engine::APP_NAME, flight_ops_engine::VERSION);
    tracing::info!("==================================================");

    // 1. 配置
    let config = OpsConfig::load_or_default(&config_path)
        .with_context(|| format!("无法加载配置: {}", config_path.display()))?;
    let config = Arc::new(config);

    // 2. 快照
    let snapshot = SnapshotLoader::new(&data_dir)
        .load()
        .with_context(|| format!("无法加载数据目录: {}", data_dir.display()))?;

    // 3. 告警日志
    let alert_log = FileAlertLog::new(&PathBuf::from(ALERT_LOG_DIR));
    alert_log
        .ensure_dirs()
        .with_context(|| format!("无法创建告警日志目录: {}", ALERT_LOG_DIR))?;

    // 4. 批次评估
    let orchestrator = OpsOrchestrator::new(config.clone(), Arc::new(alert_log));
    let result = orchestrator.run_batch(&snapshot);

    // 5. 日报
    let report_date = Local::now().date_naive();
    let report_path = DailyReport::new(&config, &snapshot, &result, report_date)
        .write_to(&output_dir)
        .with_context(|| format!("无法写入日报: {}", output_dir.display()))?;

    println!("{} - {}", config.airline.name, report_date);
    println!("  Flights assessed:       {}", result.flights.len());
    println!(
        "  Compliant crew plans:   {}/{}",
        result.compliant_count(),
        result.assessed_crew_count()
    );
    println!("  High-severity delays:   {}", result.high_delay_flights().len());
    println!("  Average predicted delay: {:.1} min", result.average_delay());
    println!(
        "  Health alerts:          {} critical / {} warning",
        result.fleet_alerts.critical.len(),
        result.fleet_alerts.warning.len()
    );
    println!("  Route suggestions:      {}", result.route_suggestions.len());
    println!("  Report saved:           {}", report_path.display());

    Ok(())
}
