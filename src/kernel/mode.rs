use std::path::Path;

/// Rendering mode handed to the editing surface, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    Markup,
    Script,
    Stylesheet,
}

impl SurfaceMode {
    pub fn from_name(name: &str) -> Self {
        match Path::new(name).extension().and_then(|s| s.to_str()) {
            Some("css") => Self::Stylesheet,
            Some("js") | Some("mjs") | Some("cjs") => Self::Script,
            _ => Self::Markup,
        }
    }

    /// Identifier understood by the editing widget's mode option.
    pub fn widget_id(self) -> &'static str {
        match self {
            Self::Markup => "htmlmixed",
            Self::Script => "javascript",
            Self::Stylesheet => "css",
        }
    }
}
