use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::join_all;

use crate::analysis::AnalysisClient;
use crate::core::insight::MoodDistribution;
use crate::core::task::Task;
use crate::core::thought::Thought;

const SUMMARY_FALLBACK: &str = "Could not load summary.";

/// One finished aggregation pass, ready for display.
#[derive(Debug, Clone)]
pub struct InsightReport {
    pub distribution: MoodDistribution,
    pub dominant_mood: &'static str,
    pub summary: String,
    /// Thoughts that actually contributed to the distribution; a failed
    /// per-thought analysis excludes only itself.
    pub thoughts_analyzed: usize,
    pub generation: u64,
}

/// Insight Aggregator: re-analyzes each thought's emotion, tallies the
/// mood distribution, and fetches a natural-language summary.
///
/// Each refresh takes a generation number; a pass superseded by a newer
/// one discards its result so stale network responses never overwrite a
/// fresher report. Per-thought labels are memoized by thought id and
/// invalidated when the text changes.
pub struct InsightEngine {
    analysis: AnalysisClient,
    emotion_memo: Mutex<HashMap<String, MemoEntry>>,
    generation: AtomicU64,
}

struct MemoEntry {
    text: String,
    label: String,
}

impl InsightEngine {
    pub fn new(analysis: AnalysisClient) -> Self {
        Self {
            analysis,
            emotion_memo: Mutex::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Run one aggregation pass. Returns `None` when a newer pass was
    /// started while this one was in flight.
    pub async fn refresh(&self, thoughts: &[Thought], incomplete: &[Task]) -> Option<InsightReport> {
        let generation = self.begin_pass();
        self.run_pass(generation, thoughts, incomplete).await
    }

    fn begin_pass(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run_pass(
        &self,
        generation: u64,
        thoughts: &[Thought],
        incomplete: &[Task],
    ) -> Option<InsightReport> {
        log::info!(
            "Insight pass {}: {} thoughts, {} incomplete tasks",
            generation,
            thoughts.len(),
            incomplete.len()
        );

        // The fan-out and the summary are independent; run both at once
        // and wait for everything to settle.
        let (settled, summary) = futures::join!(
            self.analyze_all(thoughts),
            self.fetch_summary(thoughts, incomplete),
        );

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Insight pass {} superseded, discarding result", generation);
            return None;
        }

        let distribution = MoodDistribution::tally(&settled);
        log::info!(
            "Insight pass {} done: {} analyzed, mood {}",
            generation,
            distribution.analyzed(),
            distribution.dominant_mood()
        );

        Some(InsightReport {
            distribution,
            dominant_mood: distribution.dominant_mood(),
            summary,
            thoughts_analyzed: distribution.analyzed(),
            generation,
        })
    }

    /// One independent analysis request per thought with non-empty text.
    /// A failed request settles as `None` without aborting the batch.
    async fn analyze_all(&self, thoughts: &[Thought]) -> Vec<Option<String>> {
        let requests = thoughts
            .iter()
            .filter(|t| !t.thought.trim().is_empty())
            .map(|t| self.analyze_one(t));
        join_all(requests).await
    }

    async fn analyze_one(&self, thought: &Thought) -> Option<String> {
        if let Some(label) = self.memo_lookup(&thought.id, &thought.thought) {
            return Some(label);
        }
        match self.analysis.analyze_emotion(thought.thought.trim()).await {
            Ok(label) => {
                self.memo_store(&thought.id, &thought.thought, &label);
                Some(label)
            }
            Err(e) => {
                log::debug!("Skipping thought {} in distribution: {}", thought.id, e);
                None
            }
        }
    }

    async fn fetch_summary(&self, thoughts: &[Thought], incomplete: &[Task]) -> String {
        let texts: Vec<String> = thoughts.iter().map(|t| t.thought.clone()).collect();
        let names: Vec<String> = incomplete.iter().map(|t| t.name.clone()).collect();
        match self.analysis.summarize(&texts, &names).await {
            Ok(summary) => summary,
            Err(e) => {
                log::warn!("Summary request failed: {}", e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    fn memo_lookup(&self, id: &str, text: &str) -> Option<String> {
        let memo = self.emotion_memo.lock().ok()?;
        memo.get(id)
            .filter(|entry| entry.text == text)
            .map(|entry| entry.label.clone())
    }

    fn memo_store(&self, id: &str, text: &str, label: &str) {
        if let Ok(mut memo) = self.emotion_memo.lock() {
            memo.insert(
                id.to_string(),
                MemoEntry {
                    text: text.to_string(),
                    label: label.to_string(),
                },
            );
        }
    }
}
