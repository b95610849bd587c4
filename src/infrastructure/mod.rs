// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与数据库、对象存储等外部系统交互。
///
/// 包含的子模块：
/// - 缓存（cache）：按查询身份缓存读取结果，写操作后整体失效
/// - 数据库（database）：数据库连接、迁移和实体映射
/// - 指标（metrics）：Prometheus 指标导出
/// - 仓库实现（repositories）：领域仓库接口的 SeaORM 实现
/// - 存储（storage）：Logo和APK的对象存储实现
///
/// 基础设施层遵循依赖倒置原则，依赖于领域层的抽象接口。
pub mod cache;
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod storage;
