use chrono::NaiveDate;

use crate::analysis::AnalysisClient;
use crate::config::MindwellConfig;
use crate::core::suggest::{self, Suggestion, SuggestionPriority, SuggestionStrategy};
use crate::core::task::{NewTask, Task};
use crate::core::thought::{Emotion, Thought};
use crate::insights::{InsightEngine, InsightReport};
use crate::store::tasks::TaskStore;
use crate::store::thoughts::ThoughtStore;
use crate::store::{self, DocStore};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    Store(#[from] store::Error),
    #[error("remote suggestion failed: {0}")]
    Remote(String),
}

/// Both task partitions, reloaded together after every mutation.
#[derive(Debug, Clone, Default)]
pub struct TaskLists {
    pub incomplete: Vec<Task>,
    pub completed: Vec<Task>,
}

/// Facade the presentation layer drives. All collaborators are handed in
/// at construction; mutations apply immediately (any cosmetic delay is
/// the presentation layer's business) and hand back freshly loaded state.
pub struct Dashboard {
    tasks: TaskStore,
    thoughts: ThoughtStore,
    analysis: AnalysisClient,
    engine: InsightEngine,
    strategy: SuggestionStrategy,
}

impl Dashboard {
    pub fn new(store: DocStore, analysis: AnalysisClient, strategy: SuggestionStrategy) -> Self {
        Self {
            tasks: TaskStore::new(store.clone()),
            thoughts: ThoughtStore::new(store),
            engine: InsightEngine::new(analysis.clone()),
            analysis,
            strategy,
        }
    }

    pub fn from_config(config: &MindwellConfig) -> Result<Self, Error> {
        let store = DocStore::new(&config.store_url)?;
        let analysis = AnalysisClient::new(&config.analysis_url).map_err(Error::Remote)?;
        Ok(Self::new(store, analysis, config.suggestion_strategy))
    }

    /// Full reload of both task partitions.
    pub async fn load_tasks(&self) -> Result<TaskLists, Error> {
        Ok(TaskLists {
            incomplete: self.tasks.incomplete().await?,
            completed: self.tasks.completed().await?,
        })
    }

    /// Validate and create a task, then reload.
    pub async fn add_task(&self, task: NewTask) -> Result<TaskLists, Error> {
        task.validate().map_err(Error::InvalidInput)?;
        self.tasks.add(&task).await?;
        self.load_tasks().await
    }

    /// Mark a task complete and reload.
    pub async fn complete_task(&self, id: &str) -> Result<TaskLists, Error> {
        self.tasks.complete(id).await?;
        self.load_tasks().await
    }

    /// Delete a task (incomplete or completed) and reload.
    pub async fn delete_task(&self, id: &str) -> Result<TaskLists, Error> {
        self.tasks.delete(id).await?;
        self.load_tasks().await
    }

    pub async fn thoughts(&self) -> Result<Vec<Thought>, Error> {
        Ok(self.thoughts.all().await?)
    }

    /// Analyze and store a new thought, then reload the list.
    ///
    /// The emotion is assigned once, here; a failed analysis stores the
    /// thought as neutral rather than losing it.
    pub async fn add_thought(&self, text: &str) -> Result<Vec<Thought>, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("thought text must not be empty"));
        }

        let emotion = match self.analysis.analyze_emotion(text).await {
            Ok(label) => Emotion::from_label_or_neutral(&label),
            Err(e) => {
                log::warn!("Emotion analysis failed, storing as neutral: {}", e);
                Emotion::Neutral
            }
        };

        self.thoughts.add(text, emotion).await?;
        self.thoughts().await
    }

    pub async fn delete_thought(&self, id: &str) -> Result<Vec<Thought>, Error> {
        self.thoughts.delete(id).await?;
        self.thoughts().await
    }

    /// One prioritized suggestion, from the local rules or the remote
    /// endpoint depending on the configured strategy.
    pub async fn suggestion(
        &self,
        thoughts: &[Thought],
        incomplete: &[Task],
    ) -> Result<Suggestion, Error> {
        match self.strategy {
            SuggestionStrategy::LocalRules => {
                Ok(suggest::suggest(thoughts, incomplete, today()))
            }
            SuggestionStrategy::Remote => {
                let texts: Vec<String> = thoughts.iter().map(|t| t.thought.clone()).collect();
                let names: Vec<String> = incomplete.iter().map(|t| t.name.clone()).collect();
                let title = self
                    .analysis
                    .suggest_task(&texts, &names)
                    .await
                    .map_err(Error::Remote)?;
                Ok(Suggestion {
                    title,
                    description: "Suggested from your recent thoughts and tasks.".to_string(),
                    priority: SuggestionPriority::Medium,
                    icon: "sparkles",
                })
            }
        }
    }

    /// Run an insight aggregation pass. `None` means the pass was
    /// superseded by a newer one and its result was discarded.
    pub async fn insights(
        &self,
        thoughts: &[Thought],
        incomplete: &[Task],
    ) -> Option<InsightReport> {
        self.engine.refresh(thoughts, incomplete).await
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard(strategy: SuggestionStrategy) -> Dashboard {
        // Dead endpoints: only validation and local rules can succeed.
        Dashboard::new(
            DocStore::new("http://127.0.0.1:1").unwrap(),
            AnalysisClient::new("http://127.0.0.1:1").unwrap(),
            strategy,
        )
    }

    #[tokio::test]
    async fn empty_task_name_is_rejected_before_the_store() {
        let dash = dashboard(SuggestionStrategy::LocalRules);
        let task = NewTask::new("  ", chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        match dash.add_task(task).await {
            Err(Error::InvalidInput(_)) => {}
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn empty_thought_is_rejected_before_the_store() {
        let dash = dashboard(SuggestionStrategy::LocalRules);
        match dash.add_thought("   ").await {
            Err(Error::InvalidInput(_)) => {}
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn local_suggestions_need_no_network() {
        let dash = dashboard(SuggestionStrategy::LocalRules);
        let suggestion = dash.suggestion(&[], &[]).await.unwrap();
        assert_eq!(suggestion.priority, SuggestionPriority::Low);
    }

    #[tokio::test]
    async fn remote_suggestion_failure_is_surfaced() {
        let dash = dashboard(SuggestionStrategy::Remote);
        match dash.suggestion(&[], &[]).await {
            Err(Error::Remote(_)) => {}
            other => panic!("expected remote error, got {:?}", other.map(|_| ())),
        }
    }
}
