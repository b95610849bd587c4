// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 公司仓库（company_repository）：管理公司记录，并定义通用的仓库错误
/// - 网站链接仓库（website_link_repository）：管理公司的网站链接
/// - 应用仓库（app_repository）：管理公司的APK应用
/// - 存储仓库（storage_repository）：管理Logo和APK等二进制资源
/// - 用户仓库（user_repository）：管理管理员身份与角色
pub mod app_repository;
pub mod company_repository;
pub mod storage_repository;
pub mod user_repository;
pub mod website_link_repository;
