/// Output options shared by the printing passes
#[derive(Debug, Clone)]
pub struct Config {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Append each node's start location to tree dumps
    pub show_locations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: 4,
            show_locations: false,
        }
    }
}
