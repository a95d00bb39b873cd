//! Scene graph types.
//!
//! A [`SceneGraph`] maps scene identifiers to [`Scene`]s while remembering
//! declaration order, which is the order renderers emit scenes in.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Identifier of the scene a story begins in.
pub const START_SCENE: &str = "START";

/// A labeled edge from one scene to another.
///
/// The destination is only a name here; the semantic pass checks that a
/// scene with that name exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Button text shown to the reader
    pub label: String,
    /// Identifier of the scene this choice leads to
    pub destination: String,
}

impl Choice {
    /// Create a choice.
    pub fn new(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
        }
    }
}

/// A named unit of narrative with its outgoing choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Unique identifier, `[A-Za-z_][A-Za-z0-9_]*`
    pub id: String,
    /// Narrative text
    pub text: String,
    /// Outgoing choices in rendering order
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Builder-style helper that appends a choice.
    pub fn with_choice(mut self, label: impl Into<String>, destination: impl Into<String>) -> Self {
        self.choices.push(Choice::new(label, destination));
        self
    }

    /// Destination identifiers of this scene's choices, in order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.destination.as_str())
    }
}

/// Ordered mapping from scene identifier to [`Scene`].
///
/// # Examples
///
/// ```
/// use story_types::{Scene, SceneGraph};
///
/// let mut graph = SceneGraph::new();
/// graph.insert(Scene::new("START", "Hi.").with_choice("Go", "END")).unwrap();
/// graph.insert(Scene::new("END", "Bye.")).unwrap();
///
/// assert_eq!(graph.ids().collect::<Vec<_>>(), vec!["START", "END"]);
/// assert!(graph.start().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneGraph {
    scenes: Vec<Scene>,
    index: HashMap<String, usize>,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scene. A scene whose identifier is already present is
    /// handed back unchanged and the graph is left as it was.
    pub fn insert(&mut self, scene: Scene) -> Result<(), Scene> {
        if self.index.contains_key(&scene.id) {
            return Err(scene);
        }
        self.index.insert(scene.id.clone(), self.scenes.len());
        self.scenes.push(scene);
        Ok(())
    }

    /// Look up a scene by identifier.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.index.get(id).map(|&i| &self.scenes[i])
    }

    /// Whether a scene with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The `START` scene, if defined.
    pub fn start(&self) -> Option<&Scene> {
        self.get(START_SCENE)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scenes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.scenes.iter()
    }

    /// Scene identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.id.as_str())
    }

    /// Total number of choice edges across all scenes.
    pub fn edge_count(&self) -> usize {
        self.scenes.iter().map(|s| s.choices.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SceneGraph {
    type Item = &'a Scene;
    type IntoIter = std::slice::Iter<'a, Scene>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenes.iter()
    }
}

impl Serialize for SceneGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scenes.len()))?;
        for scene in &self.scenes {
            map.serialize_entry(&scene.id, scene)?;
        }
        map.end()
    }
}
