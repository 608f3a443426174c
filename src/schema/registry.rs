use super::topology::TopologicalSort;
use crate::{Error, comment, follower, like, notification, post, user};
use sea_orm::sea_query::{
    Alias, Iden, IndexCreateStatement, Table, TableCreateStatement, TableRef,
};
use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, Iterable, RelationTrait, Schema};
use std::sync::OnceLock;
use tracing::debug;

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// The process-wide registry of the social schema.
///
/// Built on first call and never modified afterwards.
pub fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(|| {
        SchemaRegistry::builder()
            .register(user::Entity)
            .register(post::Entity)
            .register(like::Entity)
            .register(comment::Entity)
            .register(follower::Entity)
            .register(notification::Entity)
            .build()
    })
}

/// What the registry knows about one Entity
#[derive(Debug)]
pub struct EntitySchema {
    name: String,
    parents: Vec<String>,
    table: fn(&Schema) -> TableCreateStatement,
    indexes: fn(&Schema) -> Vec<IndexCreateStatement>,
}

impl EntitySchema {
    fn of<E>(entity: E) -> Self
    where
        E: EntityTrait,
    {
        let name = entity.table_name().to_owned();
        let mut parents: Vec<String> = Vec::new();
        for relation in E::Relation::iter() {
            let def = relation.def();
            // only the referencing side of a relation carries the foreign key
            if def.is_owner {
                continue;
            }
            if let Some(parent) = table_name(&def.to_tbl) {
                if parent != name && !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
        }
        Self {
            name,
            parents,
            table: create_table::<E>,
            indexes: create_indexes::<E>,
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tables this one holds foreign keys to
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// `CREATE TABLE` for the given backend
    pub fn create_table_statement(&self, backend: DbBackend) -> TableCreateStatement {
        (self.table)(&Schema::new(backend))
    }
}

fn create_table<E>(schema: &Schema) -> TableCreateStatement
where
    E: EntityTrait,
{
    schema.create_table_from_entity(E::default())
}

fn create_indexes<E>(schema: &Schema) -> Vec<IndexCreateStatement>
where
    E: EntityTrait,
{
    schema.create_index_from_entity(E::default())
}

fn table_name(table_ref: &TableRef) -> Option<String> {
    match table_ref {
        TableRef::Table(tbl)
        | TableRef::SchemaTable(_, tbl)
        | TableRef::DatabaseSchemaTable(_, _, tbl) => Some(Iden::to_string(&**tbl)),
        _ => None,
    }
}

/// Collects entities before they are frozen into a [`SchemaRegistry`]
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    entities: Vec<EntitySchema>,
}

impl SchemaRegistryBuilder {
    /// Register an entity. Registering the same table twice is a no-op.
    pub fn register<E>(mut self, entity: E) -> Self
    where
        E: EntityTrait,
    {
        let schema = EntitySchema::of(entity);
        if self.entities.iter().any(|e| e.name == schema.name) {
            debug!("Skipped {}: already registered", schema.name);
        } else {
            debug!("Registered {}", schema.name);
            self.entities.push(schema);
        }
        self
    }

    /// Order the entities so every table comes after the tables it references
    pub fn build(self) -> SchemaRegistry {
        let mut sorter = TopologicalSort::<String>::new();
        for entity in self.entities.iter() {
            sorter.insert(entity.name.clone());
        }
        for entity in self.entities.iter() {
            for parent in entity.parents.iter() {
                // references to tables outside the registry do not constrain the order
                if self.entities.iter().any(|e| &e.name == parent) {
                    sorter.add_dependency(parent.clone(), entity.name.clone());
                }
            }
        }
        let mut sorted = Vec::new();
        while let Some(name) = sorter.pop() {
            sorted.push(name);
        }
        if !sorter.is_empty() {
            debug!(
                "{} tables form a reference cycle, keeping registration order",
                sorter.len()
            );
        }

        let mut pending = self.entities;
        let mut entities = Vec::with_capacity(pending.len());
        for name in sorted {
            if let Some(i) = pending.iter().position(|e| e.name == name) {
                entities.push(pending.remove(i));
            }
        }
        // leftover tables
        entities.append(&mut pending);

        SchemaRegistry { entities }
    }
}

/// An immutable, dependency-ordered set of entities
#[derive(Debug)]
pub struct SchemaRegistry {
    entities: Vec<EntitySchema>,
}

impl SchemaRegistry {
    /// Start an empty builder
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Table names in creation order
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(EntitySchema::name)
    }

    /// Look up a registered entity by table name
    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// `CREATE TABLE` statements in creation order
    pub fn create_table_statements(&self, backend: DbBackend) -> Vec<TableCreateStatement> {
        self.entities
            .iter()
            .map(|e| e.create_table_statement(backend))
            .collect()
    }

    /// Create every missing table and index. Existing tables are left alone.
    pub async fn create_all<C>(&self, db: &C) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        for entity in self.entities.iter() {
            let mut table = (entity.table)(&schema);
            table.if_not_exists();
            db.execute(backend.build(&table)).await?;
            for mut index in (entity.indexes)(&schema) {
                index.if_not_exists();
                db.execute(backend.build(&index)).await?;
            }
            debug!(table = %entity.name, "created table");
        }
        Ok(())
    }

    /// Drop every registered table, children first
    pub async fn drop_all<C>(&self, db: &C) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let backend = db.get_database_backend();
        for entity in self.entities.iter().rev() {
            let stmt = Table::drop()
                .table(Alias::new(entity.name.as_str()))
                .if_exists()
                .to_owned();
            db.execute(backend.build(&stmt)).await?;
            debug!(table = %entity.name, "dropped table");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn position(registry: &SchemaRegistry, table: &str) -> usize {
        registry.tables().position(|t| t == table).unwrap()
    }

    fn create_sql(table: &str) -> String {
        let stmt = registry()
            .get(table)
            .unwrap()
            .create_table_statement(DbBackend::Sqlite);
        DbBackend::Sqlite.build(&stmt).to_string()
    }

    #[test]
    fn registry_is_initialized_once() {
        assert!(std::ptr::eq(registry(), registry()));
        assert_eq!(registry().tables().count(), 6);
    }

    #[test]
    fn parents_come_first() {
        let registry = registry();
        for table in ["post", "like", "comment", "follower"] {
            assert!(position(registry, "user") < position(registry, table));
        }
        for table in ["like", "comment"] {
            assert!(position(registry, "post") < position(registry, table));
        }
    }

    #[test]
    fn parents_follow_foreign_keys() {
        let registry = registry();
        assert_eq!(registry.get("user").unwrap().parents(), &[] as &[String]);
        assert_eq!(registry.get("post").unwrap().parents(), &["user".to_owned()]);
        assert_eq!(
            registry.get("like").unwrap().parents(),
            &["post".to_owned(), "user".to_owned()]
        );
        assert_eq!(
            registry.get("comment").unwrap().parents(),
            &["user".to_owned(), "post".to_owned()]
        );
        // two roles, one parent table
        assert_eq!(
            registry.get("follower").unwrap().parents(),
            &["user".to_owned()]
        );
        assert_eq!(
            registry.get("notification").unwrap().parents(),
            &[] as &[String]
        );
    }

    #[test]
    fn registration_order_does_not_matter() {
        let registry = SchemaRegistry::builder()
            .register(like::Entity)
            .register(comment::Entity)
            .register(post::Entity)
            .register(user::Entity)
            .register(user::Entity)
            .build();
        assert_eq!(
            registry.tables().collect::<Vec<_>>(),
            vec!["user", "post", "like", "comment"]
        );
    }

    #[test]
    fn cascade_rules() {
        let post = create_sql("post");
        assert!(post.contains(r#"REFERENCES "user""#));
        assert_eq!(post.matches("ON DELETE CASCADE").count(), 1);

        for table in ["like", "comment"] {
            let sql = create_sql(table);
            assert!(sql.contains(r#"REFERENCES "user""#));
            assert!(sql.contains(r#"REFERENCES "post""#));
            assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2);
        }

        let follower = create_sql("follower");
        assert_eq!(follower.matches("ON DELETE SET NULL").count(), 2);
        assert!(!follower.contains("CASCADE"));

        let notification = create_sql("notification");
        assert!(!notification.contains("REFERENCES"));
        assert!(notification.contains(r#""type" varchar(50)"#));
    }

    #[test]
    fn column_constraints() {
        let user = create_sql("user");
        assert!(user.contains(r#""email" varchar(100)"#));
        assert!(user.contains("UNIQUE"));
        assert!(user.contains(r#""nickname" varchar(25)"#));

        let post = create_sql("post");
        assert!(post.contains(r#""description" varchar(250)"#));
        assert!(post.contains(r#""post_url" varchar(500)"#));
    }
}
