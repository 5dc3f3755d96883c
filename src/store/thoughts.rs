use serde_json::json;

use super::{DocStore, Error};
use crate::core::thought::{Emotion, Thought};

const THOUGHT_COLLECTION: &str = "thought";

/// CRUD adapter for the thought collection.
#[derive(Clone)]
pub struct ThoughtStore {
    store: DocStore,
}

impl ThoughtStore {
    pub fn new(store: DocStore) -> Self {
        Self { store }
    }

    /// Create a thought with its analyzer-assigned emotion label.
    pub async fn add(&self, text: &str, emotion: Emotion) -> Result<String, Error> {
        let fields = json!({
            "thought": text,
            "emotion": emotion.as_label(),
        });
        let id = self.store.create(THOUGHT_COLLECTION, &fields).await?;
        log::info!("Added thought {} ({})", id, emotion.as_label());
        Ok(id)
    }

    /// Every stored thought.
    pub async fn all(&self) -> Result<Vec<Thought>, Error> {
        let thoughts: Vec<Thought> = self.store.query(THOUGHT_COLLECTION, None, None).await?;
        log::debug!("Loaded {} thoughts", thoughts.len());
        Ok(thoughts)
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.store.delete(THOUGHT_COLLECTION, id).await?;
        log::info!("Deleted thought {}", id);
        Ok(())
    }
}
