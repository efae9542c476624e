use crate::error::Result;
use crate::models::job::{JobIcon, JobPosition};
use url::Url;

pub fn job_positions() -> &'static [JobPosition] {
    &JOB_POSITIONS
}

pub fn find_job(id: &str) -> Option<&'static JobPosition> {
    JOB_POSITIONS.iter().find(|job| job.id == id)
}

/// `mailto:` link behind the job detail view's apply button.
pub fn mailto_link(job: &JobPosition, careers_email: &str) -> Result<String> {
    let mut url = Url::parse(&format!("mailto:{}", careers_email))?;
    url.query_pairs_mut()
        .append_pair("subject", &format!("Application for {}", job.title));
    Ok(url.into())
}

static JOB_POSITIONS: [JobPosition; 3] = [
    JobPosition {
        id: "game-dev",
        title: "Game Developer",
        icon: JobIcon::Code,
        department: "Engineering",
        location_type: "Remote / On-site",
        description: "Join our team to create exciting game experiences using Unity or Unreal Engine. You'll be responsible for implementing gameplay mechanics, optimizing performance, and collaborating with artists and designers to bring creative visions to life.",
        requirements: &[
            "At least 2 years of experience with Unity or Unreal Engine",
            "Strong C# or C++ programming skills",
            "Experience with 2D/3D game development",
            "Portfolio demonstrating game projects",
            "Understanding of game design principles",
            "Knowledge of version control systems (Git)",
            "Ability to work collaboratively in a team environment",
        ],
        responsibilities: &[
            "Develop and implement gameplay features using Unity/Unreal Engine",
            "Write clean, maintainable, and efficient code",
            "Optimize game performance on various platforms",
            "Fix bugs and technical issues",
            "Collaborate with artists, designers, and other team members",
            "Participate in code reviews and technical discussions",
            "Stay updated with the latest gaming technologies and trends",
        ],
        benefits: &[
            "Competitive salary and benefits package",
            "Flexible working hours",
            "Professional development opportunities",
            "Modern, creative workspace",
            "Team building events and game jams",
            "Healthcare coverage",
            "Paid time off and holidays",
        ],
    },
    JobPosition {
        id: "3d-artist",
        title: "3D Artist",
        icon: JobIcon::Palette,
        department: "Art",
        location_type: "Remote / On-site",
        description: "Create captivating 3D assets, characters and environments for our games. You'll work closely with the art director and game designers to develop visually stunning and optimized game assets that bring our worlds to life.",
        requirements: &[
            "Experience with 3D modeling software (Blender, Maya, or 3ds Max)",
            "Strong understanding of texturing and lighting",
            "Ability to create optimized game-ready assets",
            "An eye for cartoon-style design",
            "Knowledge of PBR workflows",
            "Understanding of topology and UV unwrapping",
            "Portfolio demonstrating 3D modeling skills",
        ],
        responsibilities: &[
            "Create 3D models, textures, and animations for games",
            "Design characters, environments, and props",
            "Optimize 3D assets for various platforms",
            "Collaborate with the art team and game designers",
            "Follow art direction and style guides",
            "Iterate on designs based on feedback",
            "Meet project deadlines and quality standards",
        ],
        benefits: &[
            "Competitive salary and benefits package",
            "Creative freedom and artistic growth",
            "Access to industry-standard tools and software",
            "Portfolio development opportunities",
            "Collaborative and supportive work environment",
            "Healthcare coverage",
            "Flexible working arrangements",
        ],
    },
    JobPosition {
        id: "game-design-lead",
        title: "Game Design Lead",
        icon: JobIcon::Users,
        department: "Design",
        location_type: "On-site",
        description: "Lead the design team in creating engaging gameplay mechanics and experiences. You'll define the vision for our games and oversee the implementation of game systems, levels, and player experiences that keep our audience engaged.",
        requirements: &[
            "5+ years of game design experience",
            "Experience leading design teams",
            "Strong understanding of player psychology and engagement",
            "Excellent communication and documentation skills",
            "Portfolio of shipped games",
            "Experience with game design tools and engines",
            "Ability to analyze data and make design decisions",
        ],
        responsibilities: &[
            "Lead and mentor the game design team",
            "Develop game design documents and specifications",
            "Create compelling game mechanics and systems",
            "Balance gameplay elements for optimal player experience",
            "Collaborate with artists, developers, and producers",
            "Playtest and iterate on game features",
            "Present design concepts to stakeholders",
        ],
        benefits: &[
            "Leadership role with creative control",
            "Competitive salary and comprehensive benefits",
            "Professional development budget",
            "Influence on company's game portfolio",
            "Modern office with game testing facilities",
            "Team retreats and industry events",
            "Profit sharing opportunities",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_listings_in_order() {
        let ids: Vec<&str> = job_positions().iter().map(|job| job.id).collect();
        assert_eq!(ids, ["game-dev", "3d-artist", "game-design-lead"]);
    }

    #[test]
    fn every_listing_is_complete() {
        for job in job_positions() {
            assert!(!job.title.is_empty());
            assert!(!job.description.is_empty());
            assert_eq!(job.requirements.len(), 7, "{}", job.id);
            assert_eq!(job.responsibilities.len(), 7, "{}", job.id);
            assert_eq!(job.benefits.len(), 7, "{}", job.id);
        }
    }

    #[test]
    fn find_job_by_id() {
        let job = find_job("3d-artist").unwrap();
        assert_eq!(job.title, "3D Artist");
        assert_eq!(job.icon, JobIcon::Palette);
        assert!(find_job("producer").is_none());
    }

    #[test]
    fn mailto_link_encodes_subject() {
        let job = find_job("game-dev").unwrap();
        let link = mailto_link(job, "careers@nexzap.studio").unwrap();
        assert_eq!(
            link,
            "mailto:careers@nexzap.studio?subject=Application+for+Game+Developer"
        );
    }

    #[test]
    fn mailto_subject_keeps_reserved_characters() {
        let job = JobPosition {
            title: "Art & Animation = 2D+3D",
            ..*find_job("3d-artist").unwrap()
        };
        let link = mailto_link(&job, "careers@nexzap.studio").unwrap();
        assert_eq!(
            link,
            "mailto:careers@nexzap.studio?subject=Application+for+Art+%26+Animation+%3D+2D%2B3D"
        );

        let parsed = url::Url::parse(&link).unwrap();
        let subjects: Vec<_> = parsed.query_pairs().collect();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].1, "Application for Art & Animation = 2D+3D");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(find_job("game-design-lead").unwrap()).unwrap();
        assert_eq!(json["locationType"], "On-site");
        assert_eq!(json["icon"], "users");
        assert_eq!(json["benefits"].as_array().unwrap().len(), 7);
    }
}
