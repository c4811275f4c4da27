//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`events`] - 活动管理接口
//! - [`entries`] - 场次记录接口
//! - [`reports`] - 财务报告接口
//! - [`dashboard`] - 仪表盘汇总接口
//! - [`splits`] - 分成表编辑接口

pub mod auth;
pub mod health;

// Resource API
pub mod dashboard;
pub mod entries;
pub mod events;
pub mod reports;
pub mod splits;
