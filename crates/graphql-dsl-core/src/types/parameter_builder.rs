use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// Mutable configuration for one argument of a field being declared.
/// Sealed into a [`Parameter`] when the enclosing `arg` block returns.
#[derive(Debug)]
pub struct ParameterBuilder {
    description: Option<String>,
    name: String,
    type_annotation: TypeAnnotation,
}
impl ParameterBuilder {
    pub(crate) fn new(name: String, type_annotation: TypeAnnotation) -> Self {
        Self {
            description: None,
            name,
            type_annotation,
        }
    }

    /// Overrides the inferred argument name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Arguments default to non-null.
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.type_annotation = self.type_annotation.clone().with_nullable(nullable);
        self
    }

    pub(crate) fn build(self) -> Parameter {
        Parameter {
            description: self.description,
            name: self.name,
            type_annotation: self.type_annotation,
        }
    }
}
