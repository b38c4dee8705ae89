//! Point-threshold badge catalog.
//!
//! Badges are only ever granted by task completion. A badge is granted once
//! the user's point total reaches its threshold and is never revoked.

use crate::models::{Badge, User};
use crate::types::Timestamp;

/// A badge definition from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub min_points: u64,
}

/// All point-threshold badges, lowest threshold first.
pub const BADGE_CATALOG: &[BadgeRule] = &[
    BadgeRule {
        id: "worker-bee",
        name: "Worker Bee",
        description: "Completed a first task",
        icon: "🐝",
        min_points: 1,
    },
    BadgeRule {
        id: "rising-star",
        name: "Rising Star",
        description: "Earned 100 points",
        icon: "⭐",
        min_points: 100,
    },
    BadgeRule {
        id: "hive-builder",
        name: "Hive Builder",
        description: "Earned 500 points",
        icon: "🏗️",
        min_points: 500,
    },
    BadgeRule {
        id: "queen-bee",
        name: "Queen Bee",
        description: "Earned 1000 points",
        icon: "👑",
        min_points: 1000,
    },
];

impl BadgeRule {
    pub fn to_badge(&self, earned_date: Timestamp) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            earned_date,
        }
    }
}

/// Badges the user qualifies for at their current point total but does not hold yet.
pub fn newly_earned(user: &User, now: Timestamp) -> Vec<Badge> {
    BADGE_CATALOG
        .iter()
        .filter(|rule| user.points >= rule.min_points && !user.has_badge(rule.id))
        .map(|rule| rule.to_badge(now))
        .collect()
}
