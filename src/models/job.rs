use serde::Serialize;

/// Category icon shown on a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobIcon {
    Code,
    Palette,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosition {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: JobIcon,
    pub department: &'static str,
    pub location_type: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub benefits: &'static [&'static str],
}
