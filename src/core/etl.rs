use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs extract, transform and load in order, stopping at the first error.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the paths of the written reports.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting strip standings process...");
        let started = Instant::now();

        let phase = Instant::now();
        let classifications = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} classifications ({} groups) in {:?}",
            classifications.len(),
            classifications.iter().map(|c| c.total_groups()).sum::<usize>(),
            phase.elapsed()
        );

        let phase = Instant::now();
        let globals = self.pipeline.transform(classifications).await?;
        tracing::info!(
            "Built {} global classifications ({} teams) in {:?}",
            globals.len(),
            globals.iter().map(|g| g.teams.len()).sum::<usize>(),
            phase.elapsed()
        );

        let phase = Instant::now();
        let written = self.pipeline.load(globals).await?;
        tracing::info!("Wrote {} files in {:?}", written.len(), phase.elapsed());

        tracing::info!("Process finished in {:?}", started.elapsed());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, GlobalClassification};
    use crate::utils::error::StripError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPipeline {
        fail_extract: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<Classification>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_extract {
                return Err(StripError::parse("broken page"));
            }
            Ok(vec![Classification {
                competition: "Cadet 4a Div Fem".to_string(),
                category: "Cadet 4a Div Fem".to_string(),
                url: String::new(),
                groups: vec![],
            }])
        }

        async fn transform(&self, data: Vec<Classification>) -> Result<Vec<GlobalClassification>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(data
                .into_iter()
                .map(|c| GlobalClassification {
                    competition: c.competition,
                    category: c.category,
                    teams: vec![],
                })
                .collect())
        }

        async fn load(&self, result: Vec<GlobalClassification>) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(result.into_iter().map(|g| format!("{}.csv", g.category)).collect())
        }
    }

    #[tokio::test]
    async fn test_runs_all_phases() {
        let engine = EtlEngine::new(CountingPipeline::default());
        let written = engine.run().await.unwrap();

        assert_eq!(written, vec!["Cadet 4a Div Fem.csv".to_string()]);
        assert_eq!(engine.pipeline.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stops_at_first_error() {
        let engine = EtlEngine::new(CountingPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(matches!(engine.run().await, Err(StripError::Parse { .. })));
        assert_eq!(engine.pipeline.calls.load(Ordering::SeqCst), 1);
    }
}
