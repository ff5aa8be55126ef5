//! Declared record shapes and the metadata describing them.
//!
//! Each model carries a static [`ModelMeta`] listing its table, display labels
//! and fields. Field constraints are checked by [`FieldMeta::clean`] before a
//! value is handed to a store.

mod test;

pub use self::test::{Test, NAME_MAX_LENGTH};

/// Column type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
   /// Auto-incrementing 64-bit primary key, assigned by the store.
   BigAuto,
   /// Bounded text, measured in characters.
   Char { max_length: usize },
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
   pub name: &'static str,
   pub verbose_name: &'static str,
   pub field_type: FieldType,
   /// Absent values may be stored.
   pub null: bool,
   /// Empty text is accepted.
   pub blank: bool,
}

impl FieldMeta {
   pub fn is_primary_key(&self) -> bool {
      self.field_type == FieldType::BigAuto
   }

   /// Checks a text value against this field's declared constraints.
   ///
   /// Order matches the way the checks can fail: absence first, then
   /// emptiness, then length.
   pub fn clean(&self, value: Option<&str>) -> Result<(), ValidationError> {
      let value = match value {
         Some(value) => value,
         None if self.null => return Ok(()),
         None => return Err(ValidationError::Null { field: self.name }),
      };

      if value.is_empty() && !self.blank {
         return Err(ValidationError::Blank { field: self.name });
      }

      if let FieldType::Char { max_length } = self.field_type {
         let length = value.chars().count();
         if length > max_length {
            return Err(ValidationError::TooLong {
               field: self.name,
               max_length,
               length,
            });
         }
      }

      Ok(())
   }

   /// Column definition used in `CREATE TABLE`.
   pub fn column_sql(&self) -> String {
      match self.field_type {
         FieldType::BigAuto => format!("{} BIGSERIAL PRIMARY KEY", self.name),
         FieldType::Char { max_length } => format!(
            "{} VARCHAR({}) {}",
            self.name,
            max_length,
            if self.null { "NULL" } else { "NOT NULL" }
         ),
      }
   }
}

/// Table and display metadata of a model.
#[derive(Debug, PartialEq, Eq)]
pub struct ModelMeta {
   pub app_label: &'static str,
   pub model_name: &'static str,
   pub db_table: &'static str,
   pub verbose_name: &'static str,
   pub verbose_name_plural: &'static str,
   pub fields: &'static [FieldMeta],
}

impl ModelMeta {
   pub fn field(&self, name: &str) -> Option<&FieldMeta> {
      self.fields.iter().find(|f| f.name == name)
   }

   pub fn primary_key(&self) -> Option<&FieldMeta> {
      self.fields.iter().find(|f| f.is_primary_key())
   }

   /// Comma separated column list in declaration order.
   pub fn column_list(&self) -> String {
      self
         .fields
         .iter()
         .map(|f| f.name)
         .collect::<Vec<_>>()
         .join(", ")
   }

   pub fn create_table_sql(&self) -> String {
      let columns = self
         .fields
         .iter()
         .map(FieldMeta::column_sql)
         .collect::<Vec<_>>()
         .join(", ");
      format!("CREATE TABLE IF NOT EXISTS {} ({})", self.db_table, columns)
   }
}

/// A declared constraint that a value does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
   #[error("{field}: This field cannot be null.")]
   Null { field: &'static str },

   #[error("{field}: This field cannot be blank.")]
   Blank { field: &'static str },

   #[error("{field}: Ensure this value has at most {max_length} characters (it has {length}).")]
   TooLong {
      field: &'static str,
      max_length: usize,
      length: usize,
   },
}

/// A persisted record shape.
pub trait Model {
   fn meta() -> &'static ModelMeta;

   /// Identifier assigned by the store, `None` until first saved.
   fn pk(&self) -> Option<i64>;

   /// Checks every declared field constraint.
   fn validate(&self) -> Result<(), ValidationError>;

   /// Human-readable label used in listings.
   fn display_label(&self) -> &str;

   /// Text of a declared field, `None` when the field is unknown or the value
   /// is absent.
   fn field_value(&self, field: &str) -> Option<String>;
}
