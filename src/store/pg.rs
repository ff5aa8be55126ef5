use postgres::{Client, Row};

use super::Store;
use crate::error::{Error, Result};
use crate::model::{Model, Test};
use crate::settings::DatabaseSettings;

/// Store backed by the `crud_test` table.
///
/// Validation runs before every write; the `VARCHAR(300)` column enforces the
/// same bound again on the server side.
pub struct PgStore {
   conn: Client,
}

impl PgStore {
   pub fn new(conn: Client) -> Self {
      PgStore { conn }
   }

   pub fn connect(settings: &DatabaseSettings) -> Result<Self> {
      let conn = settings.connect()?;
      debug!("connected to Postgres");
      Ok(PgStore::new(conn))
   }

   /// Creates the table for the declared shape if it is missing.
   pub fn create_table(&mut self) -> Result<()> {
      let sql = Test::meta().create_table_sql();
      debug!("{}", sql);
      self.conn.batch_execute(&sql)?;
      Ok(())
   }

   pub fn into_inner(self) -> Client {
      self.conn
   }

   fn does_not_exist(id: i64) -> Error {
      Error::DoesNotExist {
         model: Test::meta().verbose_name,
         id,
      }
   }
}

fn from_row(row: &Row) -> Test {
   Test {
      id: Some(row.get(0)),
      name: row.get(1),
   }
}

impl Store for PgStore {
   fn insert(&mut self, test: &Test) -> Result<Test> {
      test.validate()?;

      let meta = Test::meta();
      let row = self.conn.query_one(
         format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", meta.db_table).as_str(),
         &[&test.name],
      )?;
      let id: i64 = row.get(0);
      debug!("inserted {} #{}", meta.db_table, id);

      Ok(Test {
         id: Some(id),
         name: test.name.clone(),
      })
   }

   fn update(&mut self, test: &Test) -> Result<()> {
      let meta = Test::meta();
      let id = test.id.ok_or(Error::Unsaved {
         model: meta.verbose_name,
      })?;
      test.validate()?;

      let updated = self.conn.execute(
         format!("UPDATE {} SET name = $1 WHERE id = $2", meta.db_table).as_str(),
         &[&test.name, &id],
      )?;
      if updated == 0 {
         return Err(Self::does_not_exist(id));
      }
      debug!("updated {} #{}", meta.db_table, id);
      Ok(())
   }

   fn delete(&mut self, id: i64) -> Result<()> {
      let meta = Test::meta();
      let deleted = self.conn.execute(
         format!("DELETE FROM {} WHERE id = $1", meta.db_table).as_str(),
         &[&id],
      )?;
      if deleted == 0 {
         return Err(Self::does_not_exist(id));
      }
      debug!("deleted {} #{}", meta.db_table, id);
      Ok(())
   }

   fn get(&mut self, id: i64) -> Result<Test> {
      let meta = Test::meta();
      let row = self.conn.query_opt(
         format!(
            "SELECT {} FROM {} WHERE id = $1",
            meta.column_list(),
            meta.db_table
         )
         .as_str(),
         &[&id],
      )?;
      row.as_ref()
         .map(from_row)
         .ok_or_else(|| Self::does_not_exist(id))
   }

   fn all(&mut self) -> Result<Vec<Test>> {
      let meta = Test::meta();
      let rows = self.conn.query(
         format!(
            "SELECT {} FROM {} ORDER BY id",
            meta.column_list(),
            meta.db_table
         )
         .as_str(),
         &[],
      )?;
      Ok(rows.iter().map(from_row).collect())
   }
}
