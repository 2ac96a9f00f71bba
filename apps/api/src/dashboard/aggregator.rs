//! Pure derivations from a `UserRow`. Nothing here writes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::career::CareerOption;
use crate::models::user::UserRow;
use crate::quiz::engine::XP_PER_TEST;

pub const XP_PER_LEVEL: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: i32,
    pub xp_progress: i32,
    pub xp_to_next_level: i32,
}

impl LevelProgress {
    /// `level = floor(xp / 100) + 1`; progress is the remainder.
    pub fn from_xp(xp: i32) -> Self {
        let xp = xp.max(0);
        let xp_progress = xp % XP_PER_LEVEL;
        Self {
            level: xp / XP_PER_LEVEL + 1,
            xp_progress,
            xp_to_next_level: XP_PER_LEVEL - xp_progress,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub xp_level: i32,
    #[serde(flatten)]
    pub progress: LevelProgress,
    pub test_completed: bool,
    pub career_options: Option<Vec<CareerOption>>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub tasks_completed: i32,
    pub community_posts: i32,
    pub resume_updates: i32,
    pub achievements: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub timestamp: DateTime<Utc>,
    pub xp_gained: i32,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: DashboardUser,
    pub stats: DashboardStats,
    pub recent_activities: Vec<Activity>,
}

#[derive(Debug, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
    pub unlock_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AchievementsView {
    pub achievements: Vec<Achievement>,
    pub total_unlocked: usize,
    pub total_available: usize,
}

/// Badge names shown in the dashboard stats block, by XP threshold.
fn badges(user: &UserRow) -> Vec<&'static str> {
    let mut out = Vec::new();
    if user.test_completed {
        out.push("Career Test Completed");
    }
    for (threshold, name) in [
        (100, "First Level Up"),
        (500, "Career Explorer"),
        (1000, "Career Master"),
    ] {
        if user.xp >= threshold {
            out.push(name);
        }
    }
    out
}

pub fn build_stats(user: &UserRow) -> DashboardStats {
    DashboardStats {
        tasks_completed: user.xp / 25,
        community_posts: user.xp / 50,
        resume_updates: i32::from(user.test_completed),
        achievements: badges(user),
    }
}

pub fn recent_activities(user: &UserRow, now: DateTime<Utc>) -> Vec<Activity> {
    let mut out = Vec::with_capacity(2);
    if user.test_completed {
        out.push(Activity {
            kind: "test",
            title: "Completed Career Assessment",
            description: "Discovered your top career matches",
            timestamp: now,
            xp_gained: XP_PER_TEST,
        });
    }
    out.push(Activity {
        kind: "signup",
        title: "Joined Level up",
        description: "Welcome to your career journey!",
        timestamp: now,
        xp_gained: 0,
    });
    out
}

pub fn build_dashboard(user: &UserRow, now: DateTime<Utc>) -> DashboardView {
    let public = user.to_public();
    DashboardView {
        user: DashboardUser {
            id: public.id,
            name: public.name,
            email: public.email,
            profile_image: user.profile_image.clone(),
            xp_level: user.xp,
            progress: LevelProgress::from_xp(user.xp),
            test_completed: user.test_completed,
            career_options: public.career_options,
        },
        stats: build_stats(user),
        recent_activities: recent_activities(user, now),
    }
}

fn achievement(
    id: u32,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    unlocked: bool,
    now: DateTime<Utc>,
) -> Achievement {
    Achievement {
        id,
        title,
        description,
        icon,
        unlocked,
        unlock_date: unlocked.then_some(now),
    }
}

pub fn build_achievements(user: &UserRow, now: DateTime<Utc>) -> AchievementsView {
    let level = LevelProgress::from_xp(user.xp).level;
    let achievements = vec![
        achievement(1, "Welcome Aboard", "Joined Level up platform", "🎉", true, now),
        achievement(
            2,
            "Career Explorer",
            "Completed career assessment test",
            "🧭",
            user.test_completed,
            now,
        ),
        achievement(3, "Level Up", "Reached level 2", "⭐", level >= 2, now),
        achievement(4, "Career Master", "Reached level 5", "👑", level >= 5, now),
    ];
    let total_unlocked = achievements.iter().filter(|a| a.unlocked).count();
    let total_available = achievements.len();
    AchievementsView {
        achievements,
        total_unlocked,
        total_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(xp: i32, test_completed: bool) -> UserRow {
        let now = Utc::now();
        UserRow {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "hash".into(),
            xp,
            profile_image: None,
            test_completed,
            career_options: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn unlocked(view: &AchievementsView, title: &str) -> bool {
        view.achievements
            .iter()
            .find(|a| a.title == title)
            .map(|a| a.unlocked)
            .unwrap_or(false)
    }

    #[test]
    fn test_level_for_250_xp() {
        assert_eq!(
            LevelProgress::from_xp(250),
            LevelProgress {
                level: 3,
                xp_progress: 50,
                xp_to_next_level: 50
            }
        );
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(LevelProgress::from_xp(0).level, 1);
        assert_eq!(LevelProgress::from_xp(0).xp_to_next_level, 100);
        assert_eq!(LevelProgress::from_xp(99).level, 1);
        assert_eq!(LevelProgress::from_xp(100).level, 2);
        assert_eq!(LevelProgress::from_xp(100).xp_progress, 0);
    }

    #[test]
    fn test_level_up_achievement_threshold() {
        let now = Utc::now();
        assert!(!unlocked(&build_achievements(&user_with(99, false), now), "Level Up"));
        assert!(unlocked(&build_achievements(&user_with(100, false), now), "Level Up"));
    }

    #[test]
    fn test_career_master_achievement_threshold() {
        let now = Utc::now();
        assert!(!unlocked(&build_achievements(&user_with(399, true), now), "Career Master"));
        assert!(unlocked(&build_achievements(&user_with(400, true), now), "Career Master"));
    }

    #[test]
    fn test_unlock_date_only_when_unlocked() {
        let view = build_achievements(&user_with(0, false), Utc::now());
        assert_eq!(view.total_unlocked, 1);
        assert_eq!(view.total_available, 4);
        for a in &view.achievements {
            assert_eq!(a.unlock_date.is_some(), a.unlocked, "{}", a.title);
        }
    }

    #[test]
    fn test_stats_badges() {
        let stats = build_stats(&user_with(500, true));
        assert_eq!(stats.tasks_completed, 20);
        assert_eq!(stats.community_posts, 10);
        assert_eq!(stats.resume_updates, 1);
        assert_eq!(
            stats.achievements,
            vec!["Career Test Completed", "First Level Up", "Career Explorer"]
        );
    }

    #[test]
    fn test_recent_activities_order() {
        let fresh = recent_activities(&user_with(0, false), Utc::now());
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].kind, "signup");

        let done = recent_activities(&user_with(100, true), Utc::now());
        assert_eq!(done[0].kind, "test");
        assert_eq!(done[0].xp_gained, 100);
    }

    #[test]
    fn test_dashboard_flattens_progress() {
        let json = serde_json::to_value(build_dashboard(&user_with(250, true), Utc::now())).unwrap();
        assert_eq!(json["user"]["level"], 3);
        assert_eq!(json["user"]["xp_progress"], 50);
        assert_eq!(json["user"]["xp_to_next_level"], 50);
        assert_eq!(json["user"]["xp_level"], 250);
        assert!(json["user"].get("password_hash").is_none());
    }
}
