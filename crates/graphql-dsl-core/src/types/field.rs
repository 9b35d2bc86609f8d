use crate::data_fetcher::DataFetcherBinding;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// Represents a declared field: a member of an object type or one
/// top-level entry of the Query/Mutation root operation.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) args: Vec<Parameter>,
    pub(crate) data_fetcher: Option<DataFetcherBinding>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            args: vec![],
            data_fetcher: None,
            description: None,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn args(&self) -> &[Parameter] {
        &self.args
    }

    pub fn data_fetcher(&self) -> Option<&DataFetcherBinding> {
        self.data_fetcher.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The indented SDL line(s) for this field: an optional description
    /// comment followed by `name(arg: Type, …): ReturnType`. The argument
    /// list (parentheses included) is omitted when there are no arguments.
    pub(crate) fn sdl_lines(&self) -> String {
        let mut out = String::new();
        if let Some(description) = &self.description {
            out.push_str("    # ");
            out.push_str(description);
            out.push('\n');
        }
        out.push_str("    ");
        out.push_str(&self.name);
        if !self.args.is_empty() {
            let args = self
                .args
                .iter()
                .map(Parameter::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            out.push('(');
            out.push_str(&args);
            out.push(')');
        }
        out.push_str(": ");
        out.push_str(&self.type_annotation.to_string());
        out
    }
}
