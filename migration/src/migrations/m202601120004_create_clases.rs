use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120004_create_clases"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("clases"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id_clase"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("id_asignatura")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("fecha_clase")).date().not_null())
                    .col(ColumnDef::new(Alias::new("codigoqr_clase")).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("clases"), Alias::new("id_asignatura"))
                            .to(Alias::new("asignatura"), Alias::new("id_asignatura"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clases_asignatura_fecha")
                    .table(Alias::new("clases"))
                    .col(Alias::new("id_asignatura"))
                    .col(Alias::new("fecha_clase"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("clases")).to_owned())
            .await
    }
}
