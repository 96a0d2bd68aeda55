use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create default_model table
        manager
            .create_table(
                Table::create()
                    .table(DefaultModel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DefaultModel::Id).integer().not_null().auto_increment().primary_key())
                    .col(
                        ColumnDef::new(DefaultModel::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DefaultModel::UpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(DefaultModel::QueryParameter).string())
                    .to_owned(),
            )
            .await?;

        // Create request_logs table
        manager
            .create_table(
                Table::create()
                    .table(RequestLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RequestLogs::Id).integer().not_null().auto_increment().primary_key())
                    .col(
                        ColumnDef::new(RequestLogs::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RequestLogs::UpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(RequestLogs::Method).string().not_null())
                    .col(ColumnDef::new(RequestLogs::Endpoint).string().not_null())
                    .col(ColumnDef::new(RequestLogs::StatusCode).integer().not_null())
                    .col(ColumnDef::new(RequestLogs::ClientIp).string())
                    .col(ColumnDef::new(RequestLogs::ProxyIp).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_logs_creation_date")
                    .table(RequestLogs::Table)
                    .col(RequestLogs::CreationDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create app_logs table
        manager
            .create_table(
                Table::create()
                    .table(AppLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AppLogs::Id).integer().not_null().auto_increment().primary_key())
                    .col(
                        ColumnDef::new(AppLogs::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AppLogs::UpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(AppLogs::Message).string().not_null())
                    .col(ColumnDef::new(AppLogs::Level).string().not_null())
                    .col(ColumnDef::new(AppLogs::Context).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppLogs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RequestLogs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DefaultModel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DefaultModel {
    Table,
    Id,
    CreationDate,
    UpdateDate,
    QueryParameter,
}

#[derive(DeriveIden)]
enum RequestLogs {
    Table,
    Id,
    CreationDate,
    UpdateDate,
    Method,
    Endpoint,
    StatusCode,
    ClientIp,
    ProxyIp,
}

#[derive(DeriveIden)]
enum AppLogs {
    Table,
    Id,
    CreationDate,
    UpdateDate,
    Message,
    Level,
    Context,
}
