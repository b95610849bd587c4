// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM实现领域层定义的仓库接口
pub mod app_repo_impl;
pub mod company_repo_impl;
pub mod user_repo_impl;
pub mod website_link_repo_impl;
