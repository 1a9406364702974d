// ==========================================
// 航空运营决策系统 - 报表层
// ==========================================
// 职责: 批次结果 → 运营日报文本
// ==========================================

pub mod daily_report;

pub use daily_report::{report_file_name, DailyReport};
