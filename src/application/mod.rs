// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含管理端请求对象和写操作用例
pub mod dto;
pub mod use_cases;
