#[derive(Debug, Clone)]
pub struct Options {
    /// Indentation size for pretty JSON output (default: 2 spaces)
    pub indent: usize,
    /// Resolve YAML `<<` merge keys before conversion (default: on)
    pub merge_keys: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: 2,
            merge_keys: true,
        }
    }
}
