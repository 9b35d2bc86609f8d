use crate::schema::SchemaBuilder;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::sorted_by_name;

/// A fully built, immutable schema: the ordered declarations accumulated
/// by one [`schema_dsl`](crate::schema::schema_dsl) call.
///
/// Rendering ([`Schema::schema_string`]) is pure and idempotent; the same
/// sealed schema always yields byte-identical SDL.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    pub(crate) enums: Vec<EnumType>,
    pub(crate) mutations: Vec<Field>,
    pub(crate) queries: Vec<Field>,
    pub(crate) scalars: Vec<ScalarType>,
    pub(crate) types: Vec<ObjectType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Enum declarations, in declaration order.
    pub fn enums(&self) -> &[EnumType] {
        &self.enums
    }

    /// Mutation root fields, in declaration order.
    pub fn mutations(&self) -> &[Field] {
        &self.mutations
    }

    /// Looks up a declared object type by name (first declaration wins).
    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Query root fields, in declaration order.
    pub fn queries(&self) -> &[Field] {
        &self.queries
    }

    /// Scalar declarations, in declaration order.
    pub fn scalars(&self) -> &[ScalarType] {
        &self.scalars
    }

    /// Object type declarations, in declaration order.
    pub fn types(&self) -> &[ObjectType] {
        &self.types
    }

    /// Renders this schema as SDL text.
    ///
    /// Canonical layout: the `schema { … }` block first (always present),
    /// then `type QueryType` / `type MutationType` when non-empty, then
    /// all scalars as one contiguous block, then enums, then the remaining
    /// object types — declarations in declaration order, blocks separated
    /// by one blank line, 4-space indentation, no trailing newline.
    /// Duplicate declarations are not merged; they render twice.
    pub fn schema_string(&self) -> String {
        let mut blocks: Vec<String> = vec![self.schema_block()];
        if !self.queries.is_empty() {
            blocks.push(root_operation_block("QueryType", &self.queries));
        }
        if !self.mutations.is_empty() {
            blocks.push(root_operation_block("MutationType", &self.mutations));
        }
        if !self.scalars.is_empty() {
            blocks.push(
                self.scalars
                    .iter()
                    .map(ScalarType::sdl_lines)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        for enum_type in &self.enums {
            blocks.push(enum_type.sdl_block());
        }
        for object_type in &self.types {
            blocks.push(object_type.sdl_block());
        }
        blocks.join("\n\n")
    }

    fn schema_block(&self) -> String {
        let mut out = String::from("schema {");
        if !self.queries.is_empty() {
            out.push_str("\n    query: QueryType");
        }
        if !self.mutations.is_empty() {
            out.push_str("\n    mutation: MutationType");
        }
        out.push_str("\n}");
        out
    }
}
impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.schema_string())
    }
}

fn root_operation_block(type_name: &str, fields: &[Field]) -> String {
    let mut out = String::from("type ");
    out.push_str(type_name);
    out.push_str(" {");
    for field in sorted_by_name(fields) {
        out.push('\n');
        out.push_str(&field.sdl_lines());
    }
    out.push_str("\n}");
    out
}
