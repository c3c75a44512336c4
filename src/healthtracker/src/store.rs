use std::{
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::NaiveDateTime;
use healthtracker_types::{MetricType, QuantitySample};
use serde::{Deserialize, Serialize};

/// Source of raw health samples.
pub trait HealthStore {
    /// Samples of one category whose start lies in `[from, to)`.
    fn quantity_samples(
        &self,
        metric: MetricType,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> impl Future<Output = anyhow::Result<Vec<QuantitySample>>> + Send;

    /// Stores one new reading. Invalid readings are rejected before anything
    /// is written.
    fn save_sample(
        &mut self,
        sample: QuantitySample,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// On-disk shape of a health data export.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleExport {
    pub samples: Vec<QuantitySample>,
}

/// Store backed by a JSON export. Without a path it only lives in memory.
#[derive(Debug, Clone)]
pub struct JsonSampleStore {
    path: Option<PathBuf>,
    samples: Vec<QuantitySample>,
}

impl JsonSampleStore {
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Unable to read samples from `{}`", path.display()))?;

        let export: SampleExport = serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid sample export `{}`", path.display()))?;

        for sample in &export.samples {
            sample
                .validate()
                .with_context(|| format!("Invalid sample in `{}`", path.display()))?;
        }

        debug!(
            "Loaded {} samples from {}",
            export.samples.len(),
            path.display()
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            samples: export.samples,
        })
    }

    /// Like [`JsonSampleStore::open`], but a missing file starts an empty
    /// export at `path`.
    pub async fn open_or_create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await? {
            return Self::open(path).await;
        }

        debug!("No export at {}, starting empty", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            samples: Vec::new(),
        })
    }

    pub fn from_samples(samples: Vec<QuantitySample>) -> Self {
        Self {
            path: None,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub async fn write_export(
        path: impl AsRef<Path>,
        samples: Vec<QuantitySample>,
    ) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(&SampleExport { samples })?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Unable to write samples to `{}`", path.display()))?;

        Ok(())
    }
}

impl HealthStore for JsonSampleStore {
    async fn quantity_samples(
        &self,
        metric: MetricType,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> anyhow::Result<Vec<QuantitySample>> {
        let samples = self
            .samples
            .iter()
            .filter(|s| s.metric == metric && s.start >= from && s.start < to)
            .copied()
            .collect::<Vec<_>>();

        trace!("{} {} samples in [{}, {})", samples.len(), metric, from, to);
        Ok(samples)
    }

    async fn save_sample(&mut self, sample: QuantitySample) -> anyhow::Result<()> {
        sample.validate()?;
        self.samples.push(sample);

        if let Some(path) = &self.path {
            Self::write_export(path, self.samples.clone()).await?;
        }

        debug!("Saved {} sample at {}", sample.metric, sample.start);
        Ok(())
    }
}
