use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120003_create_asignatura"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("asignatura"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id_asignatura"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("id_profesor")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("nombre_asignatura")).string().not_null())
                    .col(ColumnDef::new(Alias::new("siglas_asignatura")).string().not_null())
                    .col(ColumnDef::new(Alias::new("color_asignatura")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("color_seccion_asignatura"))
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("seccion_asignatura")).string().not_null())
                    .col(ColumnDef::new(Alias::new("modalidad_asignatura")).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("asignatura"), Alias::new("id_profesor"))
                            .to(Alias::new("profesores"), Alias::new("id_profesor"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("asignatura")).to_owned())
            .await
    }
}
