use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120005_create_asistencia"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // No uniqueness on (id_clase, id_estudiante): duplicate rows for the same
    // pair are allowed and callers must tolerate them.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("asistencia"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id_asistencia"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("id_clase")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("id_estudiante")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("asistencia")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("fecha_asistencia")).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("asistencia"), Alias::new("id_clase"))
                            .to(Alias::new("clases"), Alias::new("id_clase"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("asistencia"), Alias::new("id_estudiante"))
                            .to(Alias::new("estudiantes"), Alias::new("id_estudiante"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asistencia_clase_estudiante")
                    .table(Alias::new("asistencia"))
                    .col(Alias::new("id_clase"))
                    .col(Alias::new("id_estudiante"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("asistencia")).to_owned())
            .await
    }
}
