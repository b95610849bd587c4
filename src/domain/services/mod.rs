// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 目录服务（directory_service）：公开聚合查询和管理列表查询
/// - 资源服务（asset_service）：Logo和APK上传
/// - 认证服务（auth_service）：当前用户与管理员判定
pub mod asset_service;
pub mod auth_service;
pub mod directory_service;
