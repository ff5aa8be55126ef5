use std::collections::BTreeMap;

use super::Store;
use crate::error::{Error, Result};
use crate::model::{Model, Test};

/// Keeps records in an ordered map. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryStore {
   rows: BTreeMap<i64, Option<String>>,
   next_id: i64,
}

impl Default for MemoryStore {
   fn default() -> Self {
      MemoryStore {
         rows: BTreeMap::new(),
         next_id: 1,
      }
   }
}

impl MemoryStore {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn len(&self) -> usize {
      self.rows.len()
   }

   pub fn is_empty(&self) -> bool {
      self.rows.is_empty()
   }

   fn does_not_exist(id: i64) -> Error {
      Error::DoesNotExist {
         model: Test::meta().verbose_name,
         id,
      }
   }
}

impl Store for MemoryStore {
   fn insert(&mut self, test: &Test) -> Result<Test> {
      test.validate()?;

      let id = self.next_id;
      self.next_id += 1;
      self.rows.insert(id, test.name.clone());
      debug!("inserted {} #{}", Test::meta().db_table, id);

      Ok(Test {
         id: Some(id),
         name: test.name.clone(),
      })
   }

   fn update(&mut self, test: &Test) -> Result<()> {
      let id = test.id.ok_or(Error::Unsaved {
         model: Test::meta().verbose_name,
      })?;
      test.validate()?;

      match self.rows.get_mut(&id) {
         Some(name) => {
            *name = test.name.clone();
            debug!("updated {} #{}", Test::meta().db_table, id);
            Ok(())
         }
         None => Err(Self::does_not_exist(id)),
      }
   }

   fn delete(&mut self, id: i64) -> Result<()> {
      match self.rows.remove(&id) {
         Some(_) => {
            debug!("deleted {} #{}", Test::meta().db_table, id);
            Ok(())
         }
         None => Err(Self::does_not_exist(id)),
      }
   }

   fn get(&mut self, id: i64) -> Result<Test> {
      self
         .rows
         .get(&id)
         .map(|name| Test {
            id: Some(id),
            name: name.clone(),
         })
         .ok_or_else(|| Self::does_not_exist(id))
   }

   fn all(&mut self) -> Result<Vec<Test>> {
      Ok(self
         .rows
         .iter()
         .map(|(id, name)| Test {
            id: Some(*id),
            name: name.clone(),
         })
         .collect())
   }
}
