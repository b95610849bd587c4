// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 目录表迁移：公司、网站链接与应用
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create companies table (No dependencies)
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Companies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Companies::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Companies::LogoUrl).text().null())
                    .col(
                        ColumnDef::new(Companies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Create website_links table (Depends on Companies)
        manager
            .create_table(
                Table::create()
                    .table(WebsiteLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebsiteLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebsiteLinks::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(WebsiteLinks::Title).string_len(100).not_null())
                    .col(ColumnDef::new(WebsiteLinks::Url).text().not_null())
                    .col(
                        ColumnDef::new(WebsiteLinks::Type)
                            .string_len(16)
                            .not_null()
                            .default("website"),
                    )
                    .col(
                        ColumnDef::new(WebsiteLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_website_links_company")
                            .from(WebsiteLinks::Table, WebsiteLinks::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Create apps table (Depends on Companies)
        manager
            .create_table(
                Table::create()
                    .table(Apps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Apps::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Apps::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Apps::AppName).string_len(100).not_null())
                    .col(ColumnDef::new(Apps::ApkFileUrl).text().not_null())
                    .col(
                        ColumnDef::new(Apps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apps_company")
                            .from(Apps::Table, Apps::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_active_name")
                    .table(Companies::Table)
                    .col(Companies::IsActive)
                    .col(Companies::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_website_links_company")
                    .table(WebsiteLinks::Table)
                    .col(WebsiteLinks::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apps_company")
                    .table(Apps::Table)
                    .col(Apps::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apps::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(WebsiteLinks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    LogoUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WebsiteLinks {
    Table,
    Id,
    CompanyId,
    Title,
    Url,
    Type,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Apps {
    Table,
    Id,
    CompanyId,
    AppName,
    ApkFileUrl,
    CreatedAt,
}
