#![forbid(unsafe_code)]

//! Bundled showcase samples and the syntax-explorer state.
//!
//! The samples are embedded at compile time from `data/showcase.json`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::highlighter::SyntaxHighlighter;
use crate::theme::HighlightTheme;
use langshow_text::Text;

const EMBEDDED: &str = include_str!("../data/showcase.json");

/// Language used for every bundled sample.
pub const SAMPLE_LANG: &str = "gink";

/// A tab of the syntax explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTab {
    pub label: String,
    pub code: String,
}

/// A feature card with a short code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
    pub tag: String,
    pub code: String,
}

/// All showcase content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    pub tabs: Vec<SyntaxTab>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Errors from loading samples or driving the explorer.
#[derive(Debug)]
pub enum SampleError {
    /// The sample document is not valid JSON for [`Showcase`].
    Parse(serde_json::Error),
    /// The document has no syntax tabs.
    NoTabs,
    /// A tab or feature index past the end.
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid sample document: {e}"),
            Self::NoTabs => f.write_str("sample document has no syntax tabs"),
            Self::OutOfRange { index, len } => {
                write!(f, "sample index {index} out of range (have {len})")
            }
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SampleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Showcase {
    /// Decode a showcase document.
    ///
    /// # Errors
    ///
    /// [`SampleError::Parse`] for malformed JSON, [`SampleError::NoTabs`] if
    /// the tab list is empty.
    pub fn from_json(json: &str) -> Result<Self, SampleError> {
        let showcase: Self = serde_json::from_str(json)?;
        if showcase.tabs.is_empty() {
            return Err(SampleError::NoTabs);
        }
        tracing::debug!(
            tabs = showcase.tabs.len(),
            features = showcase.features.len(),
            "loaded showcase samples"
        );
        Ok(showcase)
    }

    /// The samples compiled into the crate.
    pub fn embedded() -> Result<Self, SampleError> {
        Self::from_json(EMBEDDED)
    }

    pub fn tab(&self, index: usize) -> Result<&SyntaxTab, SampleError> {
        self.tabs.get(index).ok_or(SampleError::OutOfRange {
            index,
            len: self.tabs.len(),
        })
    }

    pub fn feature(&self, index: usize) -> Result<&Feature, SampleError> {
        self.features.get(index).ok_or(SampleError::OutOfRange {
            index,
            len: self.features.len(),
        })
    }
}

/// Ephemeral state of the syntax explorer: which tab is shown and whether the
/// panel is dark.
#[derive(Debug, Clone)]
pub struct SyntaxExplorer<'a> {
    showcase: &'a Showcase,
    active_tab: usize,
    dark_mode: bool,
}

impl<'a> SyntaxExplorer<'a> {
    /// First tab, dark mode.
    pub fn new(showcase: &'a Showcase) -> Self {
        Self {
            showcase,
            active_tab: 0,
            dark_mode: true,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// The selected tab.
    ///
    /// Returns `None` only if the showcase has no tabs, which
    /// [`Showcase::from_json`] rejects.
    pub fn active(&self) -> Option<&'a SyntaxTab> {
        self.showcase.tabs.get(self.active_tab)
    }

    /// Select a tab. Out-of-range indices leave the selection unchanged.
    pub fn select_tab(&mut self, index: usize) -> Result<(), SampleError> {
        self.showcase.tab(index)?;
        self.active_tab = index;
        Ok(())
    }

    /// Move to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        let len = self.showcase.tabs.len().max(1);
        self.active_tab = (self.active_tab + 1) % len;
    }

    /// Move to the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        let len = self.showcase.tabs.len().max(1);
        self.active_tab = (self.active_tab + len - 1) % len;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    /// Theme for the current mode.
    pub fn theme(&self) -> HighlightTheme {
        HighlightTheme::for_mode(self.dark_mode)
    }

    /// The active tab, highlighted with line numbers.
    pub fn render(&self) -> Text {
        let hl = SyntaxHighlighter::with_theme(self.theme());
        match self.active() {
            Some(tab) => hl.highlight_numbered(&tab.code, SAMPLE_LANG, 0),
            None => Text::new(),
        }
    }
}
