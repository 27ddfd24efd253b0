//! Progress recording.

use std::sync::Arc;

use parking_lot::Mutex;
use slideout::{ProgressObserver, SlideContainer, View};

use crate::MockView;

/// One progress notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSample {
    /// Name of the panel's [`MockView`], or `"?"` for other view types.
    pub panel: String,
    pub progress: f32,
}

/// Progress observer that shares its samples with every clone.
///
/// Hand one clone to the container and keep the other to read from.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    samples: Arc<Mutex<Vec<ProgressSample>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> Vec<ProgressSample> {
        self.samples.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.lock().is_empty()
    }

    /// Most recent progress reported for the named panel.
    pub fn last_for(&self, panel: &str) -> Option<f32> {
        self.samples
            .lock()
            .iter()
            .rev()
            .find(|sample| sample.panel == panel)
            .map(|sample| sample.progress)
    }

    pub fn clear(&self) {
        self.samples.lock().clear();
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(
        &mut self,
        _container: &SlideContainer,
        _primary: &dyn View,
        panel: &dyn View,
        progress: f32,
    ) {
        let name = panel
            .as_any()
            .downcast_ref::<MockView>()
            .map_or_else(|| "?".to_string(), |view| view.name.clone());
        self.samples.lock().push(ProgressSample {
            panel: name,
            progress,
        });
    }
}
