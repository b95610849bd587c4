// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 公司（company）：目录条目以及聚合后的公司视图
/// - 网站链接（website_link）：公司的公开网站和后台入口
/// - 应用（app）：公司提供下载的APK安装包
/// - 资源（asset）：上传文件与存储桶
/// - 用户（user）：访问管理接口的已认证用户
pub mod app;
pub mod asset;
pub mod company;
pub mod user;
pub mod website_link;
