//! Display metadata registered for administrative listings.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{Model, ModelMeta, Test};

/// `list_display` entry standing for the record's display label.
pub const LABEL_COLUMN: &str = "__str__";

/// Rendered in place of an absent value.
pub const EMPTY_VALUE_DISPLAY: &str = "-";

/// How one model is listed.
#[derive(Debug, Clone)]
pub struct ModelAdmin {
   meta: &'static ModelMeta,
   list_display: Vec<&'static str>,
}

impl ModelAdmin {
   pub fn new<M: Model>() -> Self {
      ModelAdmin {
         meta: M::meta(),
         list_display: vec![LABEL_COLUMN],
      }
   }

   pub fn with_list_display(mut self, columns: &[&'static str]) -> Self {
      self.list_display = columns.to_vec();
      self
   }

   pub fn app_label(&self) -> &'static str {
      self.meta.app_label
   }

   pub fn model_name(&self) -> &'static str {
      self.meta.model_name
   }

   pub fn verbose_name(&self) -> &'static str {
      self.meta.verbose_name
   }

   pub fn verbose_name_plural(&self) -> &'static str {
      self.meta.verbose_name_plural
   }

   pub fn list_display(&self) -> &[&'static str] {
      &self.list_display
   }

   fn check(&self) -> Result<()> {
      for column in &self.list_display {
         if *column != LABEL_COLUMN && self.meta.field(column).is_none() {
            return Err(Error::UnknownField {
               model: self.meta.verbose_name,
               field: column.to_string(),
            });
         }
      }
      Ok(())
   }

   /// Column titles for the listing.
   pub fn headers(&self) -> Vec<&'static str> {
      self
         .list_display
         .iter()
         .map(|column| match self.meta.field(column) {
            Some(field) => field.verbose_name,
            None => self.meta.verbose_name,
         })
         .collect()
   }

   /// One listing row for `obj`.
   pub fn row<M: Model>(&self, obj: &M) -> Vec<String> {
      self
         .list_display
         .iter()
         .map(|column| {
            let value = if *column == LABEL_COLUMN {
               Some(obj.display_label().to_string())
            } else {
               obj.field_value(column)
            };
            value.unwrap_or_else(|| EMPTY_VALUE_DISPLAY.to_string())
         })
         .collect()
   }
}

/// Registry of model admins keyed by `(app_label, model_name)`.
#[derive(Debug, Default)]
pub struct AdminSite {
   registry: BTreeMap<(&'static str, &'static str), ModelAdmin>,
}

impl AdminSite {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn register(&mut self, admin: ModelAdmin) -> Result<()> {
      admin.check()?;

      let key = (admin.app_label(), admin.model_name());
      if self.registry.contains_key(&key) {
         return Err(Error::AlreadyRegistered(format!("{}.{}", key.0, key.1)));
      }
      debug!("registered {}.{} with admin", key.0, key.1);
      self.registry.insert(key, admin);
      Ok(())
   }

   pub fn is_registered<M: Model>(&self) -> bool {
      self.get::<M>().is_some()
   }

   pub fn get<M: Model>(&self) -> Option<&ModelAdmin> {
      let meta = M::meta();
      self.registry.get(&(meta.app_label, meta.model_name))
   }

   /// Registered admins ordered by app label, then model name.
   pub fn models(&self) -> impl Iterator<Item = &ModelAdmin> {
      self.registry.values()
   }
}

/// The site with every model of this crate registered.
pub fn site() -> Result<AdminSite> {
   let mut site = AdminSite::new();
   site.register(ModelAdmin::new::<Test>())?;
   Ok(site)
}
