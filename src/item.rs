use serde::Serialize;

/// A file or folder as presented to the file manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LfmItem {
    pub path: String,
    pub name: String,
    pub is_thumb: bool,
}

impl LfmItem {
    pub fn new(path: impl Into<String>, name: impl Into<String>, is_thumb: bool) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_thumb,
        }
    }
}
