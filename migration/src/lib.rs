pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_organization;
mod m20250301_000002_create_people;
mod m20250301_000003_create_courses;
mod m20250301_000004_create_enrollments;
mod m20250315_000001_add_enroll_status_workflow;
mod m20250315_000002_add_pivot_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_organization::Migration),
            Box::new(m20250301_000002_create_people::Migration),
            Box::new(m20250301_000003_create_courses::Migration),
            Box::new(m20250301_000004_create_enrollments::Migration),
            Box::new(m20250315_000001_add_enroll_status_workflow::Migration),
            Box::new(m20250315_000002_add_pivot_unique_indexes::Migration),
        ]
    }
}
