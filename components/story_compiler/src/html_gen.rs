//! HTML generation from a scene graph
//!
//! Produces one self-contained document: embedded stylesheet, a small
//! `showScene` script, one block per scene and one button per choice.

use story_types::{Scene, SceneGraph, START_SCENE};

const DEFAULT_TITLE: &str = "Interactive Story";

const STYLESHEET: &str = r#"
body {
  font-family: 'Segoe UI', sans-serif;
  background-color: #f4f4f9;
  color: #333;
  margin: 0;
  padding: 40px;
  line-height: 1.6;
}

h2 {
  font-size: 28px;
  color: #0078d7;
  text-align: center;
  margin-bottom: 20px;
}

p {
  font-size: 18px;
  margin-top: 10px;
  text-align: center;
}

.scene {
  display: none;
  padding: 30px;
  border-radius: 8px;
  background-color: white;
  box-shadow: 0 4px 10px rgba(0,0,0,0.1);
  max-width: 700px;
  margin: auto;
}

.active {
  display: block;
}

.button-group {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  margin-top: 30px;
}

button {
  padding: 10px 24px;
  border: none;
  border-radius: 5px;
  background-color: #0078d7;
  color: white;
  font-size: 16px;
  cursor: pointer;
  transition: background-color 0.3s;
  flex: 1 1 auto;
  margin: 5px;
}

button:hover {
  background-color: #005ea6;
}
"#;

const SCRIPT: &str = r#"
function showScene(id) {
  document.querySelectorAll('.scene').forEach(s => s.classList.remove('active'));
  const target = document.getElementById(id);
  if (target) target.classList.add('active');
}
"#;

/// HTML generator that renders a scene graph as an interactive page
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    title: String,
}

impl HtmlGenerator {
    /// Create a generator with the default document title
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the graph. Scenes appear in declaration order and `START`
    /// is the scene shown when the page loads.
    pub fn generate(&self, graph: &SceneGraph) -> String {
        let mut html = vec![
            "<!DOCTYPE html>".to_string(),
            "<html>".to_string(),
            "<head>".to_string(),
            "<meta charset='UTF-8'>".to_string(),
            format!("<title>{}</title>", escape_html(&self.title)),
            "<style>".to_string(),
            STYLESHEET.trim().to_string(),
            "</style>".to_string(),
            "<script>".to_string(),
            SCRIPT.trim().to_string(),
            "</script>".to_string(),
            "</head>".to_string(),
            "<body>".to_string(),
        ];

        for scene in graph {
            self.visit_scene(scene, &mut html);
        }

        html.push(format!("<script>showScene('{}');</script>", START_SCENE));
        html.push("</body>".to_string());
        html.push("</html>".to_string());

        html.join("\n")
    }

    fn visit_scene(&self, scene: &Scene, html: &mut Vec<String>) {
        html.push(format!("<div class='scene' id='{}'>", scene.id));
        html.push(format!("<h2>{}</h2>", scene.id));
        html.push(format!("<p>{}</p>", escape_html(&scene.text)));

        if !scene.choices.is_empty() {
            html.push("<div class='button-group'>".to_string());
            for choice in &scene.choices {
                html.push(format!(
                    "<button onclick=\"showScene('{}')\">{}</button>",
                    choice.destination,
                    escape_html(&choice.label)
                ));
            }
            html.push("</div>".to_string());
        }

        html.push("</div>".to_string());
    }
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
