use crate::schema::Schema;
use crate::type_info::GraphQLEnumInfo;
use crate::type_info::GraphQLObjectInfo;
use crate::type_info::GraphQLTypeInfo;
use crate::type_info::decapitalized;
use crate::types::EnumType;
use crate::types::EnumTypeBuilder;
use crate::types::Field;
use crate::types::FieldBuilder;
use crate::types::ObjectType;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarType;
use crate::types::ScalarTypeBuilder;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds a [`Schema`] from a single configuration scope:
///
/// ```
/// use graphql_dsl_core::schema::schema_dsl;
///
/// let schema = schema_dsl(|s| {
///     s.scalar::<f64>(|_| {})?;
///     s.query::<String>(|q| {
///         q.name("greeting");
///         Ok(())
///     })
/// }).unwrap();
///
/// assert!(schema.schema_string().contains("greeting: String!"));
/// ```
///
/// Each call creates a fresh accumulator; nothing is shared across build
/// calls. Errors raised inside the block surface immediately and leave no
/// usable schema.
pub fn schema_dsl<F>(config: F) -> Result<Schema>
where
    F: FnOnce(&mut SchemaBuilder) -> Result<()>,
{
    let mut builder = SchemaBuilder::new();
    config(&mut builder)?;
    Ok(builder.build())
}

/// The accumulator behind [`schema_dsl`]: collects every declaration made
/// during one configuration scope, in declaration order, then seals them
/// into an immutable [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    enums: Vec<EnumType>,
    mutations: Vec<Field>,
    queries: Vec<Field>,
    scalars: Vec<ScalarType>,
    types: Vec<ObjectType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            enums: vec![],
            mutations: vec![],
            queries: vec![],
            scalars: vec![],
            types: vec![],
        }
    }

    /// Declares a scalar named after `T` (unless the block overrides it).
    pub fn scalar<T: GraphQLTypeInfo>(
        &mut self,
        config: impl FnOnce(&mut ScalarTypeBuilder),
    ) -> Result<()> {
        let annotation = T::type_annotation();
        if annotation.is_list() {
            return Err(SchemaBuildError::NamedTypeRequired {
                context: format!("scalar '{}'", annotation.graphql_type_name()),
            });
        }
        let mut builder = ScalarTypeBuilder::new(T::graphql_name());
        config(&mut builder);
        let scalar = builder.build();
        log::debug!("declared scalar '{}'", scalar.name());
        self.scalars.push(scalar);
        Ok(())
    }

    /// Declares an enum with `T`'s variant list, in variant order.
    pub fn enum_type<T: GraphQLEnumInfo>(
        &mut self,
        config: impl FnOnce(&mut EnumTypeBuilder),
    ) -> Result<()> {
        let mut builder = EnumTypeBuilder::new(T::graphql_name(), T::values());
        config(&mut builder);
        let enum_type = builder.build();
        log::debug!("declared enum '{}'", enum_type.name());
        self.enums.push(enum_type);
        Ok(())
    }

    /// Declares an object type auto-populated with `T`'s member fields.
    pub fn object_type<T: GraphQLObjectInfo>(
        &mut self,
        config: impl FnOnce(&mut ObjectTypeBuilder) -> Result<()>,
    ) -> Result<()> {
        let mut builder = ObjectTypeBuilder::from_object_info::<T>()?;
        config(&mut builder)?;
        let object_type = builder.build();
        log::debug!("declared type '{}'", object_type.name());
        self.types.push(object_type);
        Ok(())
    }

    /// Appends one field to the Query root operation. Repeated calls
    /// accumulate; two queries with the same resulting name both render.
    pub fn query<T: GraphQLTypeInfo>(
        &mut self,
        config: impl FnOnce(&mut FieldBuilder) -> Result<()>,
    ) -> Result<()> {
        let field = Self::operation_field::<T>("query", config)?;
        log::debug!("declared query '{}'", field.name());
        self.queries.push(field);
        Ok(())
    }

    /// Appends one field to the Mutation root operation.
    pub fn mutation<T: GraphQLTypeInfo>(
        &mut self,
        config: impl FnOnce(&mut FieldBuilder) -> Result<()>,
    ) -> Result<()> {
        let field = Self::operation_field::<T>("mutation", config)?;
        log::debug!("declared mutation '{}'", field.name());
        self.mutations.push(field);
        Ok(())
    }

    fn operation_field<T: GraphQLTypeInfo>(
        kind: &str,
        config: impl FnOnce(&mut FieldBuilder) -> Result<()>,
    ) -> Result<Field> {
        let annotation = T::type_annotation();
        if annotation.is_list() {
            return Err(SchemaBuildError::ListTypeRequiresOverride {
                context: format!("{kind} '{}'", decapitalized(&T::graphql_name())),
            });
        }
        let mut builder = FieldBuilder::new(
            decapitalized(&T::graphql_name()),
            annotation,
        );
        config(&mut builder)?;
        Ok(builder.build())
    }

    /// Seals the accumulated declarations.
    pub fn build(self) -> Schema {
        Schema {
            enums: self.enums,
            mutations: self.mutations,
            queries: self.queries,
            scalars: self.scalars,
            types: self.types,
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("field '{type_name}.{field_name}' already has a description")]
    DuplicateFieldDescription {
        type_name: String,
        field_name: String,
    },

    #[error(
        "'{context}' declares a native list type; list results must be \
        declared with a bracketed `return_type` override such as \"[Int]\""
    )]
    ListTypeRequiresOverride {
        context: String,
    },

    #[error("a named (non-list) type is required for {context}")]
    NamedTypeRequired {
        context: String,
    },

    #[error("nested list types are not supported: '{context}'")]
    NestedListType {
        context: String,
    },

    #[error("failed to capture static data fetcher value: {message}")]
    StaticValueSerialization {
        message: String,
    },

    #[error("field '{type_name}.{field_name}' does not exist")]
    UndefinedField {
        type_name: String,
        field_name: String,
    },
}
