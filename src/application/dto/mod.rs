// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义管理接口的请求对象，字段校验在任何远程调用之前完成
pub mod app_request;
pub mod company_request;
pub mod link_request;
