use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn warning(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.into(),
            blocking: false,
        }
    }

    pub fn blocking(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            blocking: true,
            ..Self::warning(id, title, body)
        }
    }
}
