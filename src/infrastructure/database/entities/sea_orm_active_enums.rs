// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website_link::LinkType;
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SeaLinkType {
    #[sea_orm(string_value = "website")]
    Website,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl From<LinkType> for SeaLinkType {
    fn from(link_type: LinkType) -> Self {
        match link_type {
            LinkType::Website => SeaLinkType::Website,
            LinkType::Admin => SeaLinkType::Admin,
        }
    }
}

impl From<SeaLinkType> for LinkType {
    fn from(link_type: SeaLinkType) -> Self {
        match link_type {
            SeaLinkType::Website => LinkType::Website,
            SeaLinkType::Admin => LinkType::Admin,
        }
    }
}
