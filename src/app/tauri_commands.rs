// ==========================================
// 银行业绩看板 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod config;
mod dashboard;
mod import;

pub use config::*;
pub use dashboard::*;
pub use import::*;
