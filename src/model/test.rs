use std::fmt;

use super::{FieldMeta, FieldType, Model, ModelMeta, ValidationError};

/// Maximum number of characters `Test::name` may hold.
pub const NAME_MAX_LENGTH: usize = 300;

static META: ModelMeta = ModelMeta {
   app_label: "crud",
   model_name: "test",
   db_table: "crud_test",
   verbose_name: "Test",
   verbose_name_plural: "Tests",
   fields: &[
      FieldMeta {
         name: "id",
         verbose_name: "ID",
         field_type: FieldType::BigAuto,
         null: false,
         blank: true,
      },
      FieldMeta {
         name: "name",
         verbose_name: "Name",
         field_type: FieldType::Char {
            max_length: NAME_MAX_LENGTH,
         },
         null: true,
         blank: true,
      },
   ],
};

/// `crud_test` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Test {
   pub id: Option<i64>,

   pub name: Option<String>,
}

impl Test {
   /// An unsaved record. Nothing is checked here; see [`Test::validate`].
   pub fn new(name: Option<String>) -> Self {
      Test { id: None, name }
   }

   pub fn named<S: Into<String>>(name: S) -> Self {
      Test::new(Some(name.into()))
   }

   /// The name verbatim, or an empty string when no name is set.
   pub fn display_label(&self) -> &str {
      self.name.as_deref().unwrap_or("")
   }

   pub fn validate(&self) -> Result<(), ValidationError> {
      name_field().clean(self.name.as_deref())
   }
}

fn name_field() -> &'static FieldMeta {
   &META.fields[1]
}

impl fmt::Display for Test {
   fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str(self.display_label())
   }
}

impl Model for Test {
   fn meta() -> &'static ModelMeta {
      &META
   }

   fn pk(&self) -> Option<i64> {
      self.id
   }

   fn validate(&self) -> Result<(), ValidationError> {
      Test::validate(self)
   }

   fn display_label(&self) -> &str {
      Test::display_label(self)
   }

   fn field_value(&self, field: &str) -> Option<String> {
      match field {
         "id" => self.id.map(|id| id.to_string()),
         "name" => self.name.clone(),
         _ => None,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   fn repeated(n: usize) -> String {
      "x".repeat(n)
   }

   #[test]
   fn display_label_is_the_name() {
      let test = Test::named("Alpha");
      assert_eq!(test.display_label(), "Alpha");
      assert_eq!(test.to_string(), "Alpha");
   }

   #[test]
   fn display_label_of_absent_name_is_empty() {
      let test = Test::new(None);
      assert_eq!(test.display_label(), "");
      assert_eq!(format!("{}", test), "");
   }

   #[test]
   fn null_and_blank_names_are_valid() {
      assert!(Test::new(None).validate().is_ok());
      assert!(Test::named("").validate().is_ok());
   }

   #[test]
   fn name_length_bound() {
      assert!(Test::named(repeated(NAME_MAX_LENGTH)).validate().is_ok());
      assert_eq!(
         Test::named(repeated(NAME_MAX_LENGTH + 1)).validate(),
         Err(ValidationError::TooLong {
            field: "name",
            max_length: NAME_MAX_LENGTH,
            length: NAME_MAX_LENGTH + 1,
         })
      );
   }

   #[test]
   fn multibyte_names_are_measured_in_characters() {
      let name = "é".repeat(NAME_MAX_LENGTH);
      assert!(name.len() > NAME_MAX_LENGTH);
      assert!(Test::named(name).validate().is_ok());
   }

   #[test]
   fn construction_leaves_id_unset() {
      let test = Test::named("Alpha");
      assert_eq!(test.pk(), None);
      assert_eq!(Test::default(), Test::new(None));
   }

   #[test]
   fn meta_describes_crud_test_table() {
      let meta = Test::meta();
      assert_eq!(meta.db_table, "crud_test");
      assert_eq!(meta.verbose_name, "Test");
      assert_eq!(meta.verbose_name_plural, "Tests");
      assert_eq!(meta.column_list(), "id, name");
      assert_eq!(meta.primary_key().map(|f| f.name), Some("id"));

      let name = meta.field("name").unwrap();
      assert_eq!(name.verbose_name, "Name");
      assert!(name.null && name.blank);
      assert_eq!(
         meta.create_table_sql(),
         "CREATE TABLE IF NOT EXISTS crud_test (id BIGSERIAL PRIMARY KEY, name VARCHAR(300) NULL)"
      );
   }

   #[test]
   fn field_values() {
      let test = Test {
         id: Some(7),
         name: None,
      };
      assert_eq!(test.field_value("id"), Some("7".to_string()));
      assert_eq!(test.field_value("name"), None);
      assert_eq!(test.field_value("missing"), None);
   }
}
