use crate::coercion::Coercing;
use crate::data_fetcher::DataFetcher;
use crate::data_fetcher::DataFetcherBinding;
use crate::data_fetcher::DataFetchingEnvironment;
use crate::data_fetcher::FieldError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The resolver-binding set handed to the execution engine alongside the
/// rendered SDL: root-field fetchers, per-type field fetchers, and scalar
/// coercions, all in registration order.
#[derive(Clone, Debug, Default)]
pub struct RuntimeWiring {
    pub(crate) field_fetchers: IndexMap<String, IndexMap<String, DataFetcherBinding>>,
    pub(crate) mutation_fetchers: IndexMap<String, DataFetcherBinding>,
    pub(crate) query_fetchers: IndexMap<String, DataFetcherBinding>,
    pub(crate) scalar_coercings: IndexMap<String, Coercing>,
}
impl RuntimeWiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a wiring from a configuration block:
    ///
    /// ```
    /// use graphql_dsl_core::engine::RuntimeWiring;
    /// use graphql_dsl_core::scalars;
    ///
    /// let wiring = RuntimeWiring::build(|w| {
    ///     w.scalar("UUID", scalars::uuid());
    ///     w.query_type(|q| {
    ///         q.static_data_fetcher("answer", || 42)
    ///     })
    /// }).unwrap();
    /// assert!(wiring.query_fetcher("answer").is_some());
    /// ```
    pub fn build<F>(config: F) -> Result<Self>
    where
        F: FnOnce(&mut RuntimeWiringBuilder) -> Result<()>,
    {
        let mut builder = RuntimeWiringBuilder {
            wiring: Self::new(),
        };
        config(&mut builder)?;
        Ok(builder.wiring)
    }

    pub fn query_fetcher(&self, field_name: &str) -> Option<&DataFetcherBinding> {
        self.query_fetchers.get(field_name)
    }

    pub fn mutation_fetcher(&self, field_name: &str) -> Option<&DataFetcherBinding> {
        self.mutation_fetchers.get(field_name)
    }

    pub fn field_fetcher(&self, type_name: &str, field_name: &str) -> Option<&DataFetcherBinding> {
        self.field_fetchers.get(type_name)?.get(field_name)
    }

    pub fn scalar_coercing(&self, scalar_name: &str) -> Option<&Coercing> {
        self.scalar_coercings.get(scalar_name)
    }
}

impl Schema {
    /// Collects a [`RuntimeWiring`] from the bindings registered during the
    /// DSL build itself: query/mutation fetchers, per-type fetcher maps,
    /// and the coercion strategies attached to scalar declarations.
    pub fn runtime_wiring(&self) -> RuntimeWiring {
        let mut wiring = RuntimeWiring::new();
        for field in self.queries() {
            if let Some(binding) = field.data_fetcher() {
                wiring
                    .query_fetchers
                    .insert(field.name().to_string(), binding.clone());
            }
        }
        for field in self.mutations() {
            if let Some(binding) = field.data_fetcher() {
                wiring
                    .mutation_fetchers
                    .insert(field.name().to_string(), binding.clone());
            }
        }
        for scalar in self.scalars() {
            if let Some(coercing) = scalar.coercing() {
                wiring
                    .scalar_coercings
                    .insert(scalar.name().to_string(), coercing.clone());
            }
        }
        for object_type in self.types() {
            if !object_type.data_fetchers().is_empty() {
                wiring.field_fetchers.insert(
                    object_type.name().to_string(),
                    object_type.data_fetchers().clone(),
                );
            }
        }
        wiring
    }
}

/// Mutable configuration for [`RuntimeWiring::build`].
#[derive(Debug)]
pub struct RuntimeWiringBuilder {
    wiring: RuntimeWiring,
}
impl RuntimeWiringBuilder {
    /// Wires fetchers for the Query root fields.
    pub fn query_type(
        &mut self,
        config: impl FnOnce(&mut OperationWiring<'_>) -> Result<()>,
    ) -> Result<()> {
        config(&mut OperationWiring {
            fetchers: &mut self.wiring.query_fetchers,
        })
    }

    /// Wires fetchers for the Mutation root fields.
    pub fn mutation_type(
        &mut self,
        config: impl FnOnce(&mut OperationWiring<'_>) -> Result<()>,
    ) -> Result<()> {
        config(&mut OperationWiring {
            fetchers: &mut self.wiring.mutation_fetchers,
        })
    }

    /// Wires per-field fetchers for one object type.
    pub fn type_wiring(
        &mut self,
        type_name: impl Into<String>,
        config: impl FnOnce(&mut OperationWiring<'_>) -> Result<()>,
    ) -> Result<()> {
        config(&mut OperationWiring {
            fetchers: self
                .wiring
                .field_fetchers
                .entry(type_name.into())
                .or_default(),
        })
    }

    /// Wires a coercion strategy for the named scalar.
    pub fn scalar(&mut self, scalar_name: impl Into<String>, coercing: Coercing) -> &mut Self {
        self.wiring
            .scalar_coercings
            .insert(scalar_name.into(), coercing);
        self
    }
}

/// Registers fetchers by field name within one wiring scope (a root
/// operation or one object type).
#[derive(Debug)]
pub struct OperationWiring<'a> {
    fetchers: &'a mut IndexMap<String, DataFetcherBinding>,
}
impl OperationWiring<'_> {
    /// Binds a caller-provided fetcher unchanged.
    pub fn data_fetcher(
        &mut self,
        field_name: impl Into<String>,
        fetcher: Arc<dyn DataFetcher>,
    ) -> &mut Self {
        self.fetchers
            .insert(field_name.into(), DataFetcherBinding::Dynamic(fetcher));
        self
    }

    /// Binds a value computed once, now, and reused for every query.
    pub fn static_data_fetcher<T, F>(&mut self, field_name: impl Into<String>, supplier: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        let value = serde_json::to_value(supplier()).map_err(|err| {
            SchemaBuildError::StaticValueSerialization {
                message: err.to_string(),
            }
        })?;
        self.fetchers
            .insert(field_name.into(), DataFetcherBinding::Static(value));
        Ok(())
    }

    /// Binds a fetcher invoked with the execution environment per query.
    pub fn dynamic_data_fetcher<T, F>(&mut self, field_name: impl Into<String>, fetch: F) -> &mut Self
    where
        T: Serialize,
        F: Fn(&DataFetchingEnvironment) -> std::result::Result<T, FieldError>
            + Send
            + Sync
            + 'static,
    {
        self.fetchers
            .insert(field_name.into(), DataFetcherBinding::from_fn(fetch));
        self
    }
}
