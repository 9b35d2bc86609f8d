use crate::data_fetcher::DataFetcherBinding;
use crate::data_fetcher::DataFetchingEnvironment;
use crate::engine::ExecutionError;
use crate::engine::ExecutionResult;
use crate::engine::RuntimeWiring;
use crate::schema::Schema;
use crate::types::Parameter;
use graphql_parser::query;
use graphql_parser::schema;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Raised while turning rendered SDL into an executable schema. With a
/// well-formed [`Schema`] this indicates an internal invariant violation
/// (the renderer and the declared type names disagree); it is propagated,
/// never swallowed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaCompilationError {
    #[error("error parsing schema SDL: {message}")]
    ParseError {
        message: String,
    },

    #[error("schema references undefined type '{type_name}'")]
    UndefinedType {
        type_name: String,
    },
}

type Result<T> = std::result::Result<T, SchemaCompilationError>;

impl Schema {
    /// Compiles this schema's SDL together with the given resolver wiring
    /// into an executable schema.
    pub fn executable(&self, wiring: RuntimeWiring) -> Result<ExecutableSchema> {
        ExecutableSchema::compile(self.clone(), wiring)
    }

    /// Like [`Schema::executable`], but wired from the bindings registered
    /// during the DSL build itself (see [`Schema::runtime_wiring`]).
    pub fn executable_with_bindings(&self) -> Result<ExecutableSchema> {
        self.executable(self.runtime_wiring())
    }
}

/// A schema bound to its resolvers, ready to execute query documents.
///
/// This is the reference adapter for the "compile SDL + resolver map"
/// capability: it validates the rendered SDL with `graphql-parser` and
/// executes root fields against the wired data fetchers. It supports
/// literal arguments, aliases, nested selection sets, and per-type field
/// fetchers; query variables and fragments are not supported and report an
/// [`ExecutionError`] when used.
#[derive(Clone, Debug)]
pub struct ExecutableSchema {
    schema: Schema,
    sdl: String,
    wiring: RuntimeWiring,
}
impl ExecutableSchema {
    fn compile(schema: Schema, wiring: RuntimeWiring) -> Result<Self> {
        let sdl = schema.schema_string();
        let doc = schema::parse_schema::<String>(&sdl).map_err(|err| {
            SchemaCompilationError::ParseError {
                message: err.to_string(),
            }
        })?;
        check_type_references(&doc)?;
        log::debug!(
            "compiled schema with {} top-level definitions",
            doc.definitions.len(),
        );
        Ok(Self { schema, sdl, wiring })
    }

    /// The SDL text this schema was compiled from.
    pub fn sdl(&self) -> &str {
        self.sdl.as_str()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Executes one operation from the given query document. With no
    /// `operation_name` the document's first operation runs.
    pub fn execute(&self, query_text: &str, operation_name: Option<&str>) -> ExecutionResult {
        let doc = match query::parse_query::<String>(query_text) {
            Ok(doc) => doc,
            Err(err) => {
                return ExecutionResult::new(
                    Value::Null,
                    vec![ExecutionError::QueryParseError {
                        message: err.to_string(),
                    }],
                );
            }
        };

        let Some((root, selection_set)) = select_operation(&doc, operation_name) else {
            return ExecutionResult::new(
                Value::Null,
                vec![ExecutionError::UnknownOperation {
                    operation_name: operation_name.unwrap_or_default().to_string(),
                }],
            );
        };

        log::debug!("executing {root:?} operation");
        let mut errors = vec![];
        let mut data = serde_json::Map::new();
        for selection in &selection_set.items {
            match selection {
                query::Selection::Field(field) => {
                    let key = field.alias.clone().unwrap_or_else(|| field.name.clone());
                    let value = self.execute_root_field(root, field, &mut errors);
                    data.insert(key, value);
                }
                query::Selection::FragmentSpread(_) | query::Selection::InlineFragment(_) => {
                    errors.push(ExecutionError::Unsupported {
                        feature: "fragments".to_string(),
                    });
                }
            }
        }
        ExecutionResult::new(Value::Object(data), errors)
    }

    fn execute_root_field(
        &self,
        root: RootKind,
        field: &query::Field<'_, String>,
        errors: &mut Vec<ExecutionError>,
    ) -> Value {
        let (fetchers, declared) = match root {
            RootKind::Query => (&self.wiring.query_fetchers, self.schema.queries()),
            RootKind::Mutation => (&self.wiring.mutation_fetchers, self.schema.mutations()),
        };
        let declared_field = declared.iter().find(|s| s.name() == field.name);
        let arguments =
            self.coerce_arguments(declared_field.map(|s| s.args()), &field.arguments, errors);

        let Some(binding) = fetchers.get(&field.name) else {
            errors.push(ExecutionError::MissingDataFetcher {
                field_name: field.name.clone(),
            });
            return Value::Null;
        };
        let value = self.invoke(
            binding,
            DataFetchingEnvironment::new(arguments, None),
            &field.name,
            errors,
        );
        let type_name = declared_field
            .map(|s| s.type_annotation().graphql_type_name().to_string())
            .unwrap_or_default();
        self.complete_value(value, &type_name, &field.selection_set, errors)
    }

    fn invoke(
        &self,
        binding: &DataFetcherBinding,
        env: DataFetchingEnvironment,
        field_name: &str,
        errors: &mut Vec<ExecutionError>,
    ) -> Value {
        match binding {
            DataFetcherBinding::Static(value) => value.clone(),
            DataFetcherBinding::Dynamic(fetcher) => match fetcher.fetch(&env) {
                Ok(value) => value,
                Err(err) => {
                    errors.push(ExecutionError::FetchFailure {
                        field_name: field_name.to_string(),
                        message: err.message().to_string(),
                    });
                    Value::Null
                }
            },
        }
    }

    fn coerce_arguments(
        &self,
        params: Option<&[Parameter]>,
        args: &[(String, query::Value<'_, String>)],
        errors: &mut Vec<ExecutionError>,
    ) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        for (name, literal) in args {
            let mut value = literal_to_json(literal, errors);
            let param = params.and_then(|params| params.iter().find(|p| p.name() == name));
            if let Some(param) = param {
                let scalar_name = param.type_annotation().graphql_type_name();
                if let Some(coercing) = self.wiring.scalar_coercings.get(scalar_name) {
                    if let Some(parse) =
                        coercing.literal_parser().or(coercing.value_parser())
                    {
                        match parse(&value) {
                            Ok(parsed) => value = parsed,
                            Err(err) => errors.push(ExecutionError::CoercionFailure {
                                context: name.clone(),
                                source: err,
                            }),
                        }
                    }
                }
            }
            out.insert(name.clone(), value);
        }
        out
    }

    /// Projects a resolved value through its selection set: maps over
    /// lists, resolves sub-fields through per-type fetchers or key lookup,
    /// and serializes leaves through wired scalar coercions.
    fn complete_value(
        &self,
        value: Value,
        type_name: &str,
        selection_set: &query::SelectionSet<'_, String>,
        errors: &mut Vec<ExecutionError>,
    ) -> Value {
        match value {
            Value::Null => Value::Null,
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.complete_value(item, type_name, selection_set, errors))
                    .collect(),
            ),
            value if selection_set.items.is_empty() => {
                self.serialize_leaf(value, type_name, errors)
            }
            Value::Object(map) => {
                let parent = Value::Object(map);
                let mut out = serde_json::Map::new();
                for selection in &selection_set.items {
                    match selection {
                        query::Selection::Field(sub) => {
                            let key =
                                sub.alias.clone().unwrap_or_else(|| sub.name.clone());
                            let child =
                                self.resolve_object_field(&parent, type_name, sub, errors);
                            out.insert(key, child);
                        }
                        query::Selection::FragmentSpread(_)
                        | query::Selection::InlineFragment(_) => {
                            errors.push(ExecutionError::Unsupported {
                                feature: "fragments".to_string(),
                            });
                        }
                    }
                }
                Value::Object(out)
            }
            _ => {
                errors.push(ExecutionError::SelectionOnLeaf {
                    type_name: type_name.to_string(),
                });
                Value::Null
            }
        }
    }

    fn resolve_object_field(
        &self,
        parent: &Value,
        type_name: &str,
        sub: &query::Field<'_, String>,
        errors: &mut Vec<ExecutionError>,
    ) -> Value {
        let declared_field = self
            .schema
            .object_type(type_name)
            .and_then(|t| t.field(&sub.name));
        let arguments =
            self.coerce_arguments(declared_field.map(|f| f.args()), &sub.arguments, errors);

        let binding = self
            .wiring
            .field_fetchers
            .get(type_name)
            .and_then(|fetchers| fetchers.get(&sub.name));
        let value = match binding {
            Some(binding) => self.invoke(
                binding,
                DataFetchingEnvironment::new(arguments, Some(parent.clone())),
                &sub.name,
                errors,
            ),
            None => parent
                .get(sub.name.as_str())
                .cloned()
                .unwrap_or(Value::Null),
        };

        let child_type = declared_field
            .map(|f| f.type_annotation().graphql_type_name().to_string())
            .unwrap_or_default();
        self.complete_value(value, &child_type, &sub.selection_set, errors)
    }

    fn serialize_leaf(
        &self,
        value: Value,
        type_name: &str,
        errors: &mut Vec<ExecutionError>,
    ) -> Value {
        if let Some(coercing) = self.wiring.scalar_coercings.get(type_name) {
            if let Some(serialize) = coercing.serializer() {
                return match serialize(&value) {
                    Ok(serialized) => serialized,
                    Err(err) => {
                        errors.push(ExecutionError::CoercionFailure {
                            context: type_name.to_string(),
                            source: err,
                        });
                        Value::Null
                    }
                };
            }
        }
        value
    }
}

#[derive(Clone, Copy, Debug)]
enum RootKind {
    Mutation,
    Query,
}

fn select_operation<'a, 'd>(
    doc: &'a query::Document<'d, String>,
    operation_name: Option<&str>,
) -> Option<(RootKind, &'a query::SelectionSet<'d, String>)> {
    let mut ops = doc.definitions.iter().filter_map(|def| match def {
        query::Definition::Operation(op) => match op {
            query::OperationDefinition::Query(q) => {
                Some((q.name.as_deref(), RootKind::Query, &q.selection_set))
            }
            query::OperationDefinition::Mutation(m) => {
                Some((m.name.as_deref(), RootKind::Mutation, &m.selection_set))
            }
            query::OperationDefinition::SelectionSet(set) => {
                Some((None, RootKind::Query, set))
            }
            query::OperationDefinition::Subscription(_) => None,
        },
        query::Definition::Fragment(_) => None,
    });
    match operation_name {
        Some(wanted) => ops
            .find(|(name, _, _)| *name == Some(wanted))
            .map(|(_, root, set)| (root, set)),
        None => ops.next().map(|(_, root, set)| (root, set)),
    }
}

fn literal_to_json(
    literal: &query::Value<'_, String>,
    errors: &mut Vec<ExecutionError>,
) -> Value {
    match literal {
        query::Value::Variable(_) => {
            errors.push(ExecutionError::Unsupported {
                feature: "query variables".to_string(),
            });
            Value::Null
        }
        query::Value::Int(n) => n
            .as_i64()
            .map(|v| Value::Number(v.into()))
            .unwrap_or(Value::Null),
        query::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        query::Value::String(s) => Value::String(s.clone()),
        query::Value::Boolean(b) => Value::Bool(*b),
        query::Value::Null => Value::Null,
        query::Value::Enum(name) => Value::String(name.clone()),
        query::Value::List(items) => Value::Array(
            items
                .iter()
                .map(|item| literal_to_json(item, errors))
                .collect(),
        ),
        query::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), literal_to_json(value, errors)))
                .collect(),
        ),
    }
}

fn check_type_references(doc: &schema::Document<'_, String>) -> Result<()> {
    let mut defined: HashSet<&str> =
        HashSet::from(["Int", "Float", "String", "Boolean", "ID"]);
    for def in &doc.definitions {
        if let schema::Definition::TypeDefinition(type_def) = def {
            defined.insert(type_definition_name(type_def));
        }
    }

    for def in &doc.definitions {
        match def {
            schema::Definition::SchemaDefinition(schema_def) => {
                for root in [&schema_def.query, &schema_def.mutation, &schema_def.subscription]
                    .into_iter()
                    .flatten()
                {
                    check_defined(&defined, root)?;
                }
            }
            schema::Definition::TypeDefinition(schema::TypeDefinition::Object(obj)) => {
                for field in &obj.fields {
                    check_defined(&defined, base_type_name(&field.field_type))?;
                    for arg in &field.arguments {
                        check_defined(&defined, base_type_name(&arg.value_type))?;
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_defined(defined: &HashSet<&str>, type_name: &str) -> Result<()> {
    if defined.contains(type_name) {
        Ok(())
    } else {
        Err(SchemaCompilationError::UndefinedType {
            type_name: type_name.to_string(),
        })
    }
}

fn type_definition_name<'a>(type_def: &'a schema::TypeDefinition<'_, String>) -> &'a str {
    match type_def {
        schema::TypeDefinition::Enum(t) => t.name.as_str(),
        schema::TypeDefinition::InputObject(t) => t.name.as_str(),
        schema::TypeDefinition::Interface(t) => t.name.as_str(),
        schema::TypeDefinition::Object(t) => t.name.as_str(),
        schema::TypeDefinition::Scalar(t) => t.name.as_str(),
        schema::TypeDefinition::Union(t) => t.name.as_str(),
    }
}

fn base_type_name<'a>(ty: &'a schema::Type<'_, String>) -> &'a str {
    match ty {
        schema::Type::NamedType(name) => name.as_str(),
        schema::Type::ListType(inner) => base_type_name(inner),
        schema::Type::NonNullType(inner) => base_type_name(inner),
    }
}
