use crate::coercion::Coercing;

/// Represents a declared scalar type.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(crate) coercing: Option<Coercing>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    /// The coercion strategy attached to this scalar, if any. Rendering
    /// does not require one.
    pub fn coercing(&self) -> Option<&Coercing> {
        self.coercing.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The SDL line(s) for this scalar: an optional description comment
    /// followed by `scalar Name`.
    pub(crate) fn sdl_lines(&self) -> String {
        match &self.description {
            Some(description) => format!("# {description}\nscalar {}", self.name),
            None => format!("scalar {}", self.name),
        }
    }
}
