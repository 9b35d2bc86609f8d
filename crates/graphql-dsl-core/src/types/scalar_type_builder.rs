use crate::coercion::Coercing;
use crate::types::ScalarType;

/// Mutable configuration for one scalar declaration. Sealed into a
/// [`ScalarType`] when the configuration block returns.
#[derive(Debug)]
pub struct ScalarTypeBuilder {
    coercing: Option<Coercing>,
    description: Option<String>,
    name: String,
}
impl ScalarTypeBuilder {
    pub(crate) fn new(name: String) -> Self {
        Self {
            coercing: None,
            description: None,
            name,
        }
    }

    /// Overrides the inferred scalar name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a coercion strategy. Optional: the rendered `scalar X`
    /// line does not depend on it.
    pub fn coercing(&mut self, coercing: Coercing) -> &mut Self {
        self.coercing = Some(coercing);
        self
    }

    pub(crate) fn build(self) -> ScalarType {
        ScalarType {
            coercing: self.coercing,
            description: self.description,
            name: self.name,
        }
    }
}
