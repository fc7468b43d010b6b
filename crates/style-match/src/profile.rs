//! Analysis history, points and achievements.
//!
//! This is bookkeeping around the classifier, not part of it: the tone
//! module never touches a profile.

pub mod store;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Error;
use crate::season::Season;
use crate::tone::ToneAnalysis;

pub use store::LocalStore;

/// Key under which the profile lives in the [`LocalStore`].
pub const PROFILE_KEY: &str = "style-profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    FirstAnalysis,
    AnalysisExpert,
    BeautyEnthusiast,
    SeasonalTracker,
}

impl Achievement {
    pub const ALL: [Self; 4] = [
        Self::FirstAnalysis,
        Self::AnalysisExpert,
        Self::BeautyEnthusiast,
        Self::SeasonalTracker,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstAnalysis => "First Analysis",
            Self::AnalysisExpert => "Analysis Expert",
            Self::BeautyEnthusiast => "Beauty Enthusiast",
            Self::SeasonalTracker => "Seasonal Tracker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FirstAnalysis => "Complete your first skin analysis",
            Self::AnalysisExpert => "Complete 5 skin analyses",
            Self::BeautyEnthusiast => "Earn 50 points",
            Self::SeasonalTracker => "Analyze skin in different seasons",
        }
    }

    fn is_met(&self, profile: &StyleProfile) -> bool {
        match self {
            Self::FirstAnalysis => !profile.analyses.is_empty(),
            Self::AnalysisExpert => profile.analyses.len() >= 5,
            Self::BeautyEnthusiast => profile.points >= 50,
            Self::SeasonalTracker => profile.seasons_seen() >= 2,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A saved analysis with when and in which season it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub analysis: ToneAnalysis,
    pub date: DateTime<Utc>,
    pub season: Season,
}

/// How saving an analysis updates the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// Number of most recent analyses kept.
    pub limit: usize,
    pub points_per_analysis: u32,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            limit: 10,
            points_per_analysis: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StyleProfile {
    /// Most recent first.
    pub analyses: Vec<AnalysisRecord>,
    pub achievements: Vec<Achievement>,
    pub points: u32,
}

impl StyleProfile {
    pub fn load(store: &LocalStore) -> Result<Self, Error> {
        Ok(store.get(PROFILE_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, store: &mut LocalStore) -> Result<(), Error> {
        store.set(PROFILE_KEY, self)?;
        store.flush()
    }

    /// Prepends `analysis`, trims history, awards points and returns any
    /// achievements unlocked by this save.
    pub fn record_analysis<Tz: TimeZone>(
        &mut self,
        analysis: ToneAnalysis,
        now: &DateTime<Tz>,
        policy: &HistoryPolicy,
    ) -> Vec<Achievement> {
        let record = AnalysisRecord {
            analysis,
            date: now.with_timezone(&Utc),
            season: Season::at(now),
        };
        self.analyses.insert(0, record);
        self.analyses.truncate(policy.limit.max(1));
        self.points = self.points.saturating_add(policy.points_per_analysis);
        self.check_achievements()
    }

    /// Unlocks every achievement whose condition now holds; each unlocks once.
    pub fn check_achievements(&mut self) -> Vec<Achievement> {
        let unlocked: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| !self.achievements.contains(a) && a.is_met(self))
            .collect();
        for achievement in &unlocked {
            info!(achievement = %achievement, "achievement unlocked");
        }
        self.achievements.extend(unlocked.iter().copied());
        unlocked
    }

    pub fn seasons_seen(&self) -> usize {
        self.analyses
            .iter()
            .map(|record| record.season)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.analyses.first()
    }

    /// Writes the history as pretty-printed JSON.
    pub fn export_history(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_vec_pretty(&self.analyses)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::classify;
    use chrono::Duration;

    fn march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn first_save_awards_points_and_achievement() {
        let mut profile = StyleProfile::default();
        let unlocked =
            profile.record_analysis(classify(241, 194, 161), &march(), &HistoryPolicy::default());
        assert_eq!(unlocked, vec![Achievement::FirstAnalysis]);
        assert_eq!(profile.points, 10);
        let latest = profile.latest().unwrap();
        assert_eq!(latest.season, Season::Spring);
        assert_eq!(latest.date, march());
    }

    #[test]
    fn history_keeps_most_recent_entries() {
        let mut profile = StyleProfile::default();
        let policy = HistoryPolicy::default();
        for i in 0..12u8 {
            let when = march() + Duration::minutes(i64::from(i));
            profile.record_analysis(classify(150 + i, 110, 80), &when, &policy);
        }
        assert_eq!(profile.analyses.len(), 10);
        assert_eq!(profile.latest().unwrap().analysis.rgb().r, 161);
        assert_eq!(profile.analyses.last().unwrap().analysis.rgb().r, 152);
        assert_eq!(profile.points, 120);
    }

    #[test]
    fn achievements_unlock_once() {
        let mut profile = StyleProfile::default();
        let policy = HistoryPolicy::default();
        let mut all = Vec::new();
        for _ in 0..6 {
            all.extend(profile.record_analysis(classify(200, 150, 110), &march(), &policy));
        }
        assert_eq!(
            all,
            vec![
                Achievement::FirstAnalysis,
                Achievement::AnalysisExpert,
                Achievement::BeautyEnthusiast,
            ]
        );
        assert_eq!(profile.achievements.len(), 3);
    }

    #[test]
    fn seasonal_tracker_needs_two_seasons() {
        let mut profile = StyleProfile::default();
        let policy = HistoryPolicy::default();
        profile.record_analysis(classify(200, 150, 110), &march(), &policy);
        let july = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let unlocked = profile.record_analysis(classify(200, 150, 110), &july, &policy);
        assert_eq!(unlocked, vec![Achievement::SeasonalTracker]);
        assert_eq!(profile.seasons_seen(), 2);
    }

    #[test]
    fn record_serializes_flat() {
        let mut profile = StyleProfile::default();
        profile.record_analysis(classify(166, 124, 82), &march(), &HistoryPolicy::default());
        let json = serde_json::to_value(&profile.analyses[0]).unwrap();
        assert_eq!(json["hex"], "#a67c52");
        assert_eq!(json["category"], "Light-Medium Warm");
        assert_eq!(json["season"], "spring");
        let back: AnalysisRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile.analyses[0]);
    }
}
