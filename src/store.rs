use crate::error::Result;
use crate::model::Test;

mod memory;
mod pg;

pub use self::memory::MemoryStore;
pub use self::pg::PgStore;

/// Standard persistence operations for [`Test`] records.
///
/// Every write validates the record first; a rejected record leaves the
/// store untouched.
pub trait Store {
   /// Persists a new record and returns it with its assigned id.
   /// An id already present on `test` is ignored.
   fn insert(&mut self, test: &Test) -> Result<Test>;

   fn update(&mut self, test: &Test) -> Result<()>;

   fn delete(&mut self, id: i64) -> Result<()>;

   fn get(&mut self, id: i64) -> Result<Test>;

   /// All records ordered by id.
   fn all(&mut self) -> Result<Vec<Test>>;

   /// Inserts an unsaved record (writing the new id back), updates otherwise.
   fn save(&mut self, test: &mut Test) -> Result<()> {
      match test.id {
         None => {
            let stored = self.insert(test)?;
            test.id = stored.id;
            Ok(())
         }
         Some(_) => self.update(test),
      }
   }
}
