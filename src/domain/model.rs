use serde::{Deserialize, Serialize};

/// One team's line in a group's standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// 1-based rank within the group; 0 until a ranking step assigns it.
    pub position: u32,
    pub name: String,
    /// Team page link; empty when the row carries none.
    #[serde(default)]
    pub url: String,
    pub recent_form: String,
    pub total_points: u32,
    pub points_percentage: f64,
    pub matches_played: u32,
    pub matches_won: u32,
    pub win_percentage: f64,
    pub matches_lost: u32,
    pub loss_percentage: f64,
    pub sets_for: u32,
    pub sets_against: u32,
    pub points_for: u32,
    pub avg_points_for: f64,
    pub points_against: u32,
    pub avg_points_against: f64,
    pub victories_3_sets: u32,
    pub victories_2_sets: u32,
    pub defeats_1_point: u32,
    pub defeats_0_points: u32,
    /// Snake bucket assigned by the global classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_group: Option<u32>,
}

impl TeamStats {
    pub fn sets_difference(&self) -> i64 {
        i64::from(self.sets_for) - i64::from(self.sets_against)
    }

    pub fn points_difference(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub round: u32,
    #[serde(default)]
    pub teams: Vec<TeamStats>,
}

impl Group {
    pub fn new(name: impl Into<String>, round: u32, teams: Vec<TeamStats>) -> Self {
        Self {
            name: name.into(),
            round,
            teams,
        }
    }

    pub fn total_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn leader(&self) -> Option<&TeamStats> {
        self.teams.first()
    }

    pub fn get_top(&self, n: usize) -> &[TeamStats] {
        &self.teams[..n.min(self.teams.len())]
    }

    /// First team whose name contains `name`, ignoring case.
    pub fn find_team(&self, name: &str) -> Option<&TeamStats> {
        let needle = name.to_uppercase();
        self.teams
            .iter()
            .find(|team| team.name.to_uppercase().contains(&needle))
    }
}

/// One standings page: a competition/category split into groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub competition: String,
    pub category: String,
    /// Where the page was read from: a URL or a file path.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Classification {
    pub fn total_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn total_teams(&self) -> usize {
        self.groups.iter().map(Group::total_teams).sum()
    }

    pub fn get_group(&self, name: &str) -> Option<&Group> {
        let needle = name.to_uppercase();
        self.groups
            .iter()
            .find(|group| group.name.to_uppercase().contains(&needle))
    }

    pub fn find_team_global(&self, name: &str) -> Vec<(&Group, &TeamStats)> {
        self.groups
            .iter()
            .filter_map(|group| group.find_team(name).map(|team| (group, team)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWithContext {
    pub stats: TeamStats,
    pub competition: String,
    pub category: String,
    /// Group the team was ranked in before flattening.
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalClassification {
    pub competition: String,
    pub category: String,
    pub teams: Vec<TeamWithContext>,
}
