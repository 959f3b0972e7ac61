use minijinja::Environment;
use serde::Serialize;
use textbrief_common::{Result, TextBriefError, TextStats};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Data rendered into `index.html`
#[derive(Debug, Default, Serialize)]
pub struct PageContext {
    pub error: Option<String>,
    pub user_text: Option<String>,
    pub input_stats: Option<TextStats>,
    pub summarized_text: Option<String>,
    pub summary_stats: Option<TextStats>,
    pub selected_length: String,
    pub selected_mode: String,
    pub max_input_length: usize,
}

/// Template environment; `.html` templates are auto-escaped
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)
            .map_err(|e| TextBriefError::internal(format!("Invalid index template: {}", e)))?;
        Ok(Self { env })
    }

    pub fn render_index(&self, page: &PageContext) -> Result<String> {
        self.env
            .get_template("index.html")
            .and_then(|t| t.render(page))
            .map_err(|e| TextBriefError::internal(format!("Failed to render page: {}", e)))
    }
}
