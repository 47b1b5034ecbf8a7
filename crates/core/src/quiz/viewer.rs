use crate::model::Material;
use crate::quiz::flow::QuizConfig;

/// Options forwarded to the embedded document viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    pub toolbar: bool,
    pub sidebar: bool,
    /// Zoom percentage; `None` lets the viewer pick.
    pub zoom: Option<u16>,
}

impl DocumentOptions {
    /// PDF open parameters, e.g. `#toolbar=1&navpanes=0&zoom=100`.
    #[must_use]
    pub fn fragment(&self) -> String {
        let mut fragment = format!(
            "#toolbar={}&navpanes={}",
            u8::from(self.toolbar),
            u8::from(self.sidebar)
        );
        if let Some(zoom) = self.zoom {
            fragment.push_str(&format!("&zoom={zoom}"));
        }
        fragment
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            toolbar: true,
            sidebar: true,
            zoom: None,
        }
    }
}

/// How the material viewer behaves: which quiz it runs and when it shows up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub quiz: QuizConfig,
    /// Only render while the knowledge graph is toggled on.
    pub require_graph_visible: bool,
    pub trigger_label: String,
    pub document: DocumentOptions,
}

impl ViewerConfig {
    /// Two questions, re-armed after each answer, shown alongside the graph.
    #[must_use]
    pub fn sequence() -> Self {
        Self {
            quiz: QuizConfig::sequence(),
            require_graph_visible: true,
            trigger_label: "ReThink".to_owned(),
            document: DocumentOptions::default(),
        }
    }

    /// One question per selection, always rendered for textbooks.
    #[must_use]
    pub fn single() -> Self {
        Self {
            quiz: QuizConfig::single(),
            require_graph_visible: false,
            trigger_label: "Test it!".to_owned(),
            document: DocumentOptions::default(),
        }
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizConfig) -> Self {
        self.quiz = quiz;
        self
    }

    #[must_use]
    pub fn with_require_graph_visible(mut self, require: bool) -> Self {
        self.require_graph_visible = require;
        self
    }

    /// Whether the overlay is on screen for this selection.
    #[must_use]
    pub fn should_render(&self, material: Option<&Material>, show_graph: bool) -> bool {
        let Some(material) = material else {
            return false;
        };
        material.is_textbook() && (show_graph || !self.require_graph_visible)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaterialId, MaterialKind};

    fn textbook() -> Material {
        Material::textbook(MaterialId::new(1), "Neuro", "/bookneuro.pdf").unwrap()
    }

    fn notes() -> Material {
        Material::new(
            MaterialId::new(2),
            "Notes",
            MaterialKind::Notes { body: String::new() },
        )
        .unwrap()
    }

    #[test]
    fn non_textbooks_never_render() {
        for config in [ViewerConfig::sequence(), ViewerConfig::single()] {
            for show_graph in [false, true] {
                assert!(!config.should_render(Some(&notes()), show_graph));
                assert!(!config.should_render(None, show_graph));
            }
        }
    }

    #[test]
    fn sequence_variant_waits_for_graph() {
        let config = ViewerConfig::sequence();
        assert!(!config.should_render(Some(&textbook()), false));
        assert!(config.should_render(Some(&textbook()), true));
    }

    #[test]
    fn single_variant_ignores_graph() {
        let config = ViewerConfig::single();
        assert!(config.should_render(Some(&textbook()), false));
        assert_eq!(config.trigger_label, "Test it!");
    }

    #[test]
    fn fragment_encodes_options() {
        let options = DocumentOptions {
            toolbar: true,
            sidebar: false,
            zoom: Some(125),
        };
        assert_eq!(options.fragment(), "#toolbar=1&navpanes=0&zoom=125");
        assert_eq!(DocumentOptions::default().fragment(), "#toolbar=1&navpanes=1");
    }
}
