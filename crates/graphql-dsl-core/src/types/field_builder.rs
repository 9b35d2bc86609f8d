use crate::data_fetcher::DataFetcher;
use crate::data_fetcher::DataFetcherBinding;
use crate::data_fetcher::DataFetchingEnvironment;
use crate::data_fetcher::FieldError;
use crate::schema::SchemaBuildError;
use crate::type_info::GraphQLTypeInfo;
use crate::type_info::decapitalized;
use crate::types::Field;
use crate::types::ParameterBuilder;
use crate::types::TypeAnnotation;
use serde::Serialize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Mutable configuration for one field being declared: a query, a
/// mutation, or an explicitly-added object-type field. Sealed into a
/// [`Field`] when the enclosing configuration block returns.
#[derive(Debug)]
pub struct FieldBuilder {
    args: Vec<ParameterBuilder>,
    data_fetcher: Option<DataFetcherBinding>,
    description: Option<String>,
    inferred: TypeAnnotation,
    name: String,
    nullable_override: Option<bool>,
    return_type: Option<String>,
}
impl FieldBuilder {
    pub(crate) fn new(name: String, inferred: TypeAnnotation) -> Self {
        Self {
            args: vec![],
            data_fetcher: None,
            description: None,
            inferred,
            name,
            nullable_override: None,
            return_type: None,
        }
    }

    /// Overrides the inferred field name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the inferred return type with an SDL type string. This is
    /// the only way to declare a list result (e.g. `"[User]"`).
    pub fn return_type(&mut self, sdl_type: impl Into<String>) -> &mut Self {
        self.return_type = Some(sdl_type.into());
        self
    }

    /// Return types default to non-null.
    pub fn return_type_nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable_override = Some(nullable);
        self
    }

    /// Alias of [`FieldBuilder::return_type_nullable`] for explicitly-added
    /// object-type fields, where the shorter spelling reads better.
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.return_type_nullable(nullable)
    }

    /// Declares an argument on this field, with name and nullability
    /// inferred from `T` unless the block overrides them.
    pub fn arg<T: GraphQLTypeInfo>(
        &mut self,
        config: impl FnOnce(&mut ParameterBuilder),
    ) -> Result<()> {
        let annotation = T::type_annotation();
        if annotation.is_list() {
            return Err(SchemaBuildError::NamedTypeRequired {
                context: format!("argument on '{}'", self.name),
            });
        }
        let mut builder = ParameterBuilder::new(
            decapitalized(&T::graphql_name()),
            annotation,
        );
        config(&mut builder);
        self.args.push(builder);
        Ok(())
    }

    /// Binds a caller-provided fetcher to this field unchanged.
    pub fn data_fetcher(&mut self, fetcher: Arc<dyn DataFetcher>) -> &mut Self {
        self.data_fetcher = Some(DataFetcherBinding::Dynamic(fetcher));
        self
    }

    /// Binds a value computed once, now, and reused for every query.
    pub fn static_data_fetcher<T, F>(&mut self, supplier: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        let value = serde_json::to_value(supplier()).map_err(|err| {
            SchemaBuildError::StaticValueSerialization {
                message: err.to_string(),
            }
        })?;
        self.data_fetcher = Some(DataFetcherBinding::Static(value));
        Ok(())
    }

    /// Binds a fetcher invoked with the execution environment on every
    /// query.
    pub fn dynamic_data_fetcher<T, F>(&mut self, fetch: F) -> &mut Self
    where
        T: Serialize,
        F: Fn(&DataFetchingEnvironment) -> std::result::Result<T, FieldError>
            + Send
            + Sync
            + 'static,
    {
        self.data_fetcher = Some(DataFetcherBinding::from_fn(fetch));
        self
    }

    pub(crate) fn build(self) -> Field {
        let nullable = self.nullable_override.unwrap_or(self.inferred.nullable());
        let type_annotation = match &self.return_type {
            Some(sdl_type) => TypeAnnotation::from_type_str(sdl_type, nullable),
            None => self.inferred.with_nullable(nullable),
        };
        Field {
            args: self.args.into_iter().map(ParameterBuilder::build).collect(),
            data_fetcher: self.data_fetcher,
            description: self.description,
            name: self.name,
            type_annotation,
        }
    }
}
