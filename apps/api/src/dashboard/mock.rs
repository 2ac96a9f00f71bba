//! Static content for the community, tasks and resume panels. None of it is
//! persisted; only the user-dependent flags vary.

use serde::Serialize;

use crate::dashboard::aggregator::LevelProgress;
use crate::models::user::UserRow;

/// XP shown for completing a mock task. Not credited to the user.
pub const TASK_XP_REWARD: i32 = 50;

#[derive(Debug, Serialize)]
pub struct CommunityPost {
    pub id: u32,
    pub author: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CommunityView {
    pub posts: Vec<CommunityPost>,
    pub user_level: i32,
    pub can_post: bool,
}

#[derive(Debug, Serialize)]
pub struct Task {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub xp_reward: i32,
    pub completed: bool,
    pub difficulty: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TasksView {
    pub tasks: Vec<Task>,
    pub completed_count: usize,
    pub total_count: usize,
    pub available_xp: i32,
}

#[derive(Debug, Serialize)]
pub struct TaskCompletion {
    pub task_id: String,
    pub xp_gained: i32,
    pub new_xp_total: i32,
}

#[derive(Debug, Serialize)]
pub struct ResumeSection {
    pub id: &'static str,
    pub title: &'static str,
    pub completed: bool,
    pub fields: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ResumeView {
    pub sections: Vec<ResumeSection>,
    pub completion_percentage: u32,
}

pub fn community(user: &UserRow) -> CommunityView {
    CommunityView {
        posts: vec![
            CommunityPost {
                id: 1,
                author: "Sarah Johnson",
                title: "Tips for transitioning to tech career",
                content: "Here are some valuable insights I learned during my career transition...",
                likes: 24,
                comments: 8,
                timestamp: "2024-01-15T10:30:00Z",
            },
            CommunityPost {
                id: 2,
                author: "Mike Chen",
                title: "My journey from designer to product manager",
                content: "Sharing my experience and lessons learned...",
                likes: 18,
                comments: 12,
                timestamp: "2024-01-14T15:45:00Z",
            },
        ],
        user_level: LevelProgress::from_xp(user.xp).level,
        can_post: user.test_completed,
    }
}

pub fn tasks() -> TasksView {
    let tasks = vec![
        Task {
            id: 1,
            title: "Complete LinkedIn Profile",
            description: "Optimize your LinkedIn profile for your target career",
            category: "Profile Building",
            xp_reward: 50,
            completed: false,
            difficulty: "Easy",
        },
        Task {
            id: 2,
            title: "Research Industry Trends",
            description: "Study current trends in your chosen career field",
            category: "Research",
            xp_reward: 75,
            completed: false,
            difficulty: "Medium",
        },
        Task {
            id: 3,
            title: "Network with Professionals",
            description: "Connect with 5 professionals in your target industry",
            category: "Networking",
            xp_reward: 100,
            completed: false,
            difficulty: "Hard",
        },
    ];
    let completed_count = tasks.iter().filter(|t| t.completed).count();
    let available_xp = tasks.iter().map(|t| t.xp_reward).sum();
    TasksView {
        total_count: tasks.len(),
        tasks,
        completed_count,
        available_xp,
    }
}

pub fn complete_task(user: &UserRow, task_id: String) -> TaskCompletion {
    TaskCompletion {
        task_id,
        xp_gained: TASK_XP_REWARD,
        new_xp_total: user.xp + TASK_XP_REWARD,
    }
}

pub fn resume(user: &UserRow) -> ResumeView {
    ResumeView {
        sections: vec![
            ResumeSection {
                id: "personal",
                title: "Personal Information",
                completed: true,
                fields: &["name", "email", "phone", "location"],
            },
            ResumeSection {
                id: "experience",
                title: "Work Experience",
                completed: false,
                fields: &["company", "position", "duration", "description"],
            },
            ResumeSection {
                id: "education",
                title: "Education",
                completed: false,
                fields: &["institution", "degree", "graduation_year"],
            },
            ResumeSection {
                id: "skills",
                title: "Skills",
                completed: user.test_completed,
                fields: &["technical_skills", "soft_skills", "languages"],
            },
        ],
        completion_percentage: if user.test_completed { 50 } else { 25 },
    }
}
