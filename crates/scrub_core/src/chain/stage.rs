//! Filter stage and chain types.

/// One named filter with ordered parameters.
///
/// Renders as `name` or `name=k1=v1:k2=v2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStage {
    name: String,
    params: Vec<(String, String)>,
}

impl FilterStage {
    /// Create a parameterless stage.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter (builder pattern). Order is preserved.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Get the filter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parameters in authored order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Render this stage as an engine filter expression.
    pub fn render(&self) -> String {
        if self.params.is_empty() {
            return self.name.clone();
        }
        let params = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(":");
        format!("{}={}", self.name, params)
    }
}

/// Ordered sequence of filter stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChain {
    stages: Vec<FilterStage>,
}

impl FilterChain {
    pub fn new(stages: Vec<FilterStage>) -> Self {
        Self { stages }
    }

    /// Get the stages in execution order.
    pub fn stages(&self) -> &[FilterStage] {
        &self.stages
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Render the whole chain as one comma-joined filter expression.
    pub fn render(&self) -> String {
        self.stages
            .iter()
            .map(FilterStage::render)
            .collect::<Vec<_>>()
            .join(",")
    }
}
