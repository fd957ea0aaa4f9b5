//! State models for the other interactive lesson widgets.
//!
//! These carry no DOM handles: a view asks them what should be active or
//! visible and applies the answer itself.

use std::time::Duration;

/// A row of tabs, each pointing at a content panel by id.
///
/// The clicked tab always becomes active. Its panel is shown only when a
/// panel with that id exists, so the active panel is tracked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<String>,
    panels: Vec<String>,
    active: usize,
    active_panel: Option<usize>,
}

impl TabSet {
    /// Returns `None` when `tabs` is empty. The first tab starts active.
    pub fn new<I, T, P, Q>(tabs: I, panels: P) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        P: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        if tabs.is_empty() {
            return None;
        }
        let panels: Vec<String> = panels.into_iter().map(Into::into).collect();
        let mut set = Self {
            tabs,
            panels,
            active: 0,
            active_panel: None,
        };
        set.activate(0);
        Some(set)
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn active(&self) -> &str {
        &self.tabs[self.active]
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active() == tab
    }

    /// Panel currently shown; `None` when the active tab has no panel.
    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.map(|i| self.panels[i].as_str())
    }

    /// Click `tab`. Returns false when `tab` is not one of the tabs, in which
    /// case nothing changes.
    pub fn select(&mut self, tab: &str) -> bool {
        match self.tabs.iter().position(|t| t == tab) {
            Some(i) => {
                self.activate(i);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, i: usize) {
        self.active = i;
        let target = &self.tabs[i];
        self.active_panel = self.panels.iter().position(|p| p == target);
    }
}

/// Training phases of the layered model illustration. Each stage shows its
/// own layer on top of every earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainingStage {
    #[default]
    Pretrain,
    Sft,
    Rlhf,
}

impl TrainingStage {
    pub fn label(self) -> &'static str {
        match self {
            TrainingStage::Pretrain => "pretrain",
            TrainingStage::Sft => "sft",
            TrainingStage::Rlhf => "rlhf",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TrainingStage::Pretrain => "Pre-training",
            TrainingStage::Sft => "Supervised fine-tuning",
            TrainingStage::Rlhf => "RLHF",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|st| st.label() == s.trim())
    }

    pub fn visible_layers(self) -> &'static [TrainingStage] {
        let all = Self::all();
        let n = all.iter().position(|&s| s == self).map_or(1, |i| i + 1);
        &all[..n]
    }

    pub fn all() -> &'static [TrainingStage] {
        &[TrainingStage::Pretrain, TrainingStage::Sft, TrainingStage::Rlhf]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskColor {
    Green,
    Yellow,
    Red,
}

impl RiskColor {
    pub fn label(self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Yellow => "yellow",
            RiskColor::Red => "red",
        }
    }
}

/// Crawl/walk/run rollout stages for AI autonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutonomyStage {
    Crawl,
    Walk,
    Run,
}

impl AutonomyStage {
    pub fn label(self) -> &'static str {
        match self {
            AutonomyStage::Crawl => "crawl",
            AutonomyStage::Walk => "walk",
            AutonomyStage::Run => "run",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AutonomyStage::Crawl => "AI suggests, human decides. (Low Risk)",
            AutonomyStage::Walk => "AI acts, but only internally. (Medium Risk)",
            AutonomyStage::Run => "AI acts externally with customers. (High Risk)",
        }
    }

    pub fn risk(self) -> RiskColor {
        match self {
            AutonomyStage::Crawl => RiskColor::Green,
            AutonomyStage::Walk => RiskColor::Yellow,
            AutonomyStage::Run => RiskColor::Red,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|st| st.label() == s.trim())
    }

    pub fn all() -> &'static [AutonomyStage] {
        &[AutonomyStage::Crawl, AutonomyStage::Walk, AutonomyStage::Run]
    }
}

pub const SELF_SUPERVISION_PHRASES: &[&str] = &[
    "The quick brown fox...",
    "Self-supervision is key...",
    "Data provides the labels...",
    "Enabling massive scale...",
];

/// Rotating caption for the self-supervision demo.
#[derive(Debug, Clone)]
pub struct PhraseCycle {
    phrases: &'static [&'static str],
    index: usize,
}

impl PhraseCycle {
    pub const INTERVAL: Duration = Duration::from_millis(4000);
    pub const FADE: Duration = Duration::from_millis(500);

    pub fn new(phrases: &'static [&'static str]) -> Option<Self> {
        if phrases.is_empty() {
            None
        } else {
            Some(Self { phrases, index: 0 })
        }
    }

    pub fn current(&self) -> &'static str {
        self.phrases[self.index]
    }

    /// Move to the next phrase, wrapping at the end, and return it.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % self.phrases.len();
        self.current()
    }

    /// The next `count` captions with the time each becomes visible. A swap
    /// happens every [`Self::INTERVAL`], after a [`Self::FADE`] fade-out.
    pub fn schedule(&mut self, count: usize) -> Vec<(Duration, &'static str)> {
        let mut out = Vec::with_capacity(count);
        if count == 0 {
            return out;
        }
        out.push((Duration::ZERO, self.current()));
        for i in 1..count as u32 {
            let at = Self::INTERVAL * i + Self::FADE;
            out.push((at, self.advance()));
        }
        out
    }
}

impl Default for PhraseCycle {
    fn default() -> Self {
        Self {
            phrases: SELF_SUPERVISION_PHRASES,
            index: 0,
        }
    }
}
