// ==========================================
// 航空运营决策系统 - 告警日志输出
// ==========================================
// 职责: 定义告警落盘 trait,按等级写入两个追加日志
// 约定: 每条告警单行 JSON,逐条打开/写入/关闭,不重试
// 说明: 写入失败由调用方记录后吞掉,不影响告警生成
// ==========================================

use crate::domain::risk::{AlertLogLine, HealthAlert};
use crate::domain::types::AlertSeverity;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CRITICAL_ALERT_LOG: &str = "critical_flight_alerts.log";
pub const WARNING_ALERT_LOG: &str = "aircraft_health_alerts.log";

/// 告警日志错误类型
#[derive(Error, Debug)]
pub enum AlertLogError {
    #[error("告警日志写入失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("告警序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ==========================================
// 告警输出 Trait
// ==========================================

/// 告警落盘目标
///
/// 引擎层只依赖此 trait,测试中可替换为内存实现
pub trait AlertSink: Send + Sync {
    /// 追加一条告警
    fn append(&self, alert: &HealthAlert) -> Result<(), AlertLogError>;
}

/// 空操作输出 (不落盘)
#[derive(Debug, Clone, Default)]
pub struct NoOpAlertSink;

impl AlertSink for NoOpAlertSink {
    fn append(&self, alert: &HealthAlert) -> Result<(), AlertLogError> {
        tracing::trace!(
            aircraft_id = %alert.aircraft_id,
            alert_type = %alert.alert_type,
            "NoOpAlertSink: 跳过告警落盘"
        );
        Ok(())
    }
}

// ==========================================
// FileAlertLog - 双文件追加日志
// ==========================================
#[derive(Debug, Clone)]
pub struct FileAlertLog {
    critical_path: PathBuf,
    warning_path: PathBuf,
}

impl FileAlertLog {
    /// 在目录下使用缺省文件名
    pub fn new(log_dir: &Path) -> Self {
        Self {
            critical_path: log_dir.join(CRITICAL_ALERT_LOG),
            warning_path: log_dir.join(WARNING_ALERT_LOG),
        }
    }

    pub fn with_paths(critical_path: PathBuf, warning_path: PathBuf) -> Self {
        Self {
            critical_path,
            warning_path,
        }
    }

    /// 创建日志所在目录
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for path in [&self.critical_path, &self.warning_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }

    /// 按等级选择日志文件
    pub fn path_for(&self, severity: AlertSeverity) -> &Path {
        match severity {
            AlertSeverity::Critical => &self.critical_path,
            AlertSeverity::Warning => &self.warning_path,
        }
    }
}

impl AlertSink for FileAlertLog {
    fn append(&self, alert: &HealthAlert) -> Result<(), AlertLogError> {
        let path = self.path_for(alert.severity);
        let line = serde_json::to_string(&AlertLogLine::from(alert))?;

        let io_err = |source| AlertLogError::Io {
            path: path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;
        writeln!(file, "{}", line).map_err(io_err)?;

        Ok(())
    }
}
