use crate::data_fetcher::DataFetcher;
use crate::data_fetcher::DataFetcherBinding;
use crate::data_fetcher::DataFetchingEnvironment;
use crate::data_fetcher::FieldError;
use crate::schema::SchemaBuildError;
use crate::type_info::GraphQLObjectInfo;
use crate::type_info::GraphQLTypeInfo;
use crate::type_info::decapitalized;
use crate::types::Field;
use crate::types::FieldBuilder;
use crate::types::ObjectType;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Mutable configuration for one object-type declaration. Created with the
/// auto-derived member fields of the underlying Rust type already
/// registered; the configuration block may describe, drop, or append
/// fields and register data fetchers. Sealed into an [`ObjectType`] when
/// the block returns.
#[derive(Debug)]
pub struct ObjectTypeBuilder {
    added_fields: IndexMap<String, Field>,
    data_fetchers: IndexMap<String, DataFetcherBinding>,
    description: Option<String>,
    fields: IndexMap<String, Field>,
    name: String,
}
impl ObjectTypeBuilder {
    pub(crate) fn from_object_info<T: GraphQLObjectInfo>() -> Result<Self> {
        let name = T::graphql_name();
        let mut fields = IndexMap::new();
        for info in T::fields() {
            let annotation = info.type_annotation();
            if annotation.is_nested_list() {
                return Err(SchemaBuildError::NestedListType {
                    context: format!("{}.{}", name, info.name()),
                });
            }
            fields.insert(
                info.name().to_string(),
                Field::new(info.name(), annotation.clone()),
            );
        }
        Ok(Self {
            added_fields: IndexMap::new(),
            data_fetchers: IndexMap::new(),
            description: None,
            fields,
            name,
        })
    }

    /// Overrides the inferred type name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a description comment to a registered field. Errors when
    /// the field does not exist or already carries a description.
    pub fn desc(&mut self, field_name: &str, description: impl Into<String>) -> Result<()> {
        let field = match self
            .fields
            .get_mut(field_name)
            .or_else(|| self.added_fields.get_mut(field_name))
        {
            Some(field) => field,
            None => {
                return Err(SchemaBuildError::UndefinedField {
                    type_name: self.name.clone(),
                    field_name: field_name.to_string(),
                });
            }
        };
        if field.description.is_some() {
            return Err(SchemaBuildError::DuplicateFieldDescription {
                type_name: self.name.clone(),
                field_name: field_name.to_string(),
            });
        }
        field.description = Some(description.into());
        Ok(())
    }

    /// Permanently removes a registered field. Errors when the field does
    /// not exist.
    pub fn drop_field(&mut self, field_name: &str) -> Result<()> {
        if self.fields.shift_remove(field_name).is_some()
            || self.added_fields.shift_remove(field_name).is_some()
        {
            Ok(())
        } else {
            Err(SchemaBuildError::UndefinedField {
                type_name: self.name.clone(),
                field_name: field_name.to_string(),
            })
        }
    }

    /// Appends an explicit field after the auto-derived members. List
    /// results must use the `return_type("[X]")` override.
    pub fn add_field<T: GraphQLTypeInfo>(
        &mut self,
        config: impl FnOnce(&mut FieldBuilder) -> Result<()>,
    ) -> Result<()> {
        let annotation = T::type_annotation();
        if annotation.is_list() {
            return Err(SchemaBuildError::ListTypeRequiresOverride {
                context: format!("{}.{}", self.name, decapitalized(&T::graphql_name())),
            });
        }
        let mut builder = FieldBuilder::new(
            decapitalized(&T::graphql_name()),
            annotation,
        );
        config(&mut builder)?;
        let field = builder.build();
        log::debug!(
            "added explicit field '{}.{}'",
            self.name,
            field.name()
        );
        self.added_fields.insert(field.name().to_string(), field);
        Ok(())
    }

    /// Registers a caller-provided fetcher under the given field name.
    /// Names are not validated against the field maps.
    pub fn data_fetcher(&mut self, field_name: impl Into<String>, fetcher: Arc<dyn DataFetcher>) -> &mut Self {
        self.data_fetchers
            .insert(field_name.into(), DataFetcherBinding::Dynamic(fetcher));
        self
    }

    /// Registers a value computed once, now, and reused for every query.
    /// With no explicit name the decapitalized name of `T` is used.
    pub fn static_data_fetcher<T, F>(&mut self, field_name: Option<&str>, supplier: F) -> Result<()>
    where
        T: GraphQLTypeInfo + Serialize,
        F: FnOnce() -> T,
    {
        let name = self.fetcher_name::<T>(field_name);
        let value = serde_json::to_value(supplier()).map_err(|err| {
            SchemaBuildError::StaticValueSerialization {
                message: err.to_string(),
            }
        })?;
        self.data_fetchers.insert(name, DataFetcherBinding::Static(value));
        Ok(())
    }

    /// Registers a fetcher invoked with the execution environment on every
    /// query. With no explicit name the decapitalized name of `T` is used.
    pub fn dynamic_data_fetcher<T, F>(&mut self, field_name: Option<&str>, fetch: F) -> &mut Self
    where
        T: GraphQLTypeInfo + Serialize,
        F: Fn(&DataFetchingEnvironment) -> std::result::Result<T, FieldError>
            + Send
            + Sync
            + 'static,
    {
        let name = self.fetcher_name::<T>(field_name);
        self.data_fetchers.insert(name, DataFetcherBinding::from_fn(fetch));
        self
    }

    fn fetcher_name<T: GraphQLTypeInfo>(&self, field_name: Option<&str>) -> String {
        field_name
            .map(str::to_string)
            .unwrap_or_else(|| decapitalized(&T::graphql_name()))
    }

    pub(crate) fn build(mut self) -> ObjectType {
        // Fetchers bound inside `add_field` blocks surface in the type's
        // fetcher map alongside the ones registered here.
        for field in self.added_fields.values() {
            if let Some(binding) = &field.data_fetcher {
                if !self.data_fetchers.contains_key(field.name()) {
                    self.data_fetchers
                        .insert(field.name().to_string(), binding.clone());
                }
            }
        }
        ObjectType {
            added_fields: self.added_fields,
            data_fetchers: self.data_fetchers,
            description: self.description,
            fields: self.fields,
            name: self.name,
        }
    }
}
