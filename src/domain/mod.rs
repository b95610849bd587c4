// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：公司、链接、应用、资源和用户
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：聚合查询、资源上传和认证
pub mod models;
pub mod repositories;
pub mod services;
