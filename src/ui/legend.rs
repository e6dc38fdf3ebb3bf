use crate::{
    core::{config::ControlPosition, constants::LEGEND_TITLE},
    style::{DepthClassifier, LegendEntry},
};
use serde::Serialize;
use std::fmt;

/// Static depth legend panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub position: ControlPosition,
    pub entries: &'static [LegendEntry],
}

impl Legend {
    pub fn new(classifier: &DepthClassifier, position: ControlPosition) -> Self {
        Self {
            title: LEGEND_TITLE,
            position,
            entries: classifier.legend_entries(),
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(&DepthClassifier::new(), ControlPosition::default())
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for entry in self.entries {
            write!(f, "\n{:<16} {}", entry.color.to_css(), entry.label)?;
        }
        Ok(())
    }
}
