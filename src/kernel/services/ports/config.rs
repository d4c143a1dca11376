#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Buffer synthesized when the durable store is empty on startup.
    pub default_file_name: String,
    pub default_file_content: String,
    /// Seed value for the new-file prompt.
    pub new_file_placeholder: String,
    /// Delay before a transient "Saved" status reverts to idle.
    pub status_reset_ms: u64,
    /// Lines kept visible around a scrolled-to search match.
    pub scroll_margin: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_file_name: "index.html".to_string(),
            default_file_content: "<h1>Welcome</h1>".to_string(),
            new_file_placeholder: "untitled.html".to_string(),
            status_reset_ms: 2000,
            scroll_margin: 20,
        }
    }
}
