use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventStatus {
    #[sea_orm(string_value = "Upcoming")]
    Upcoming,
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Concluded")]
    Concluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventCategory {
    #[sea_orm(string_value = "Boys")]
    Boys,
    #[sea_orm(string_value = "Girls")]
    Girls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventType {
    #[sea_orm(string_value = "Individual")]
    Individual,
    #[sea_orm(string_value = "Team")]
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum WinnerPosition {
    #[sea_orm(string_value = "First")]
    First,
    #[sea_orm(string_value = "Second")]
    Second,
    #[sea_orm(string_value = "Third")]
    Third,
    #[sea_orm(string_value = "Team")]
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "public")]
    Public,
}
