//! Content Models
//!
//! Types for the static catalog rendered by the presentational pages. The data
//! itself lives next to the pages that display it; these are the shared shapes
//! plus the category filter used by the projects page.

/// Category of a completed project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Rescue,
    Worship,
    Partnership,
    Community,
}

impl ProjectCategory {
    pub const ALL: [Self; 4] = [Self::Rescue, Self::Worship, Self::Partnership, Self::Community];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rescue => "Resgates",
            Self::Worship => "Cultos",
            Self::Partnership => "Parcerias",
            Self::Community => "Ações Comunitárias",
        }
    }
}

/// A completed field action shown on the projects page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub full_description: &'static str,
    pub date: &'static str,
}

/// Filter projects by category; `None` keeps everything ("Todos").
pub fn filter_by_category(
    projects: &'static [Project],
    category: Option<ProjectCategory>,
) -> Vec<&'static Project> {
    projects
        .iter()
        .filter(|project| category.is_none_or(|wanted| project.category == wanted))
        .collect()
}

/// Kind of supporting partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnerKind {
    Church,
    Company,
    TherapeuticCenter,
}

impl PartnerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Church => "Igreja",
            Self::Company => "Empresa",
            Self::TherapeuticCenter => "Centro Terapêutico",
        }
    }
}

/// A supporting organization shown on the partners page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partner {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub kind: PartnerKind,
}

/// A testimonial shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
    pub image: Option<&'static str>,
}

/// A team member shown on the about page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    static PROJECTS: [Project; 3] = [
        Project {
            id: "1",
            title: "Resgate na Praça Central",
            description: "Acolhimento de pessoas em situação de rua",
            category: ProjectCategory::Rescue,
            image: "",
            full_description: "",
            date: "15/01/2024",
        },
        Project {
            id: "2",
            title: "Culto de Gratidão",
            description: "Celebração com ex-assistidos",
            category: ProjectCategory::Worship,
            image: "",
            full_description: "",
            date: "10/02/2024",
        },
        Project {
            id: "3",
            title: "Campanha de Inverno",
            description: "Distribuição de cobertores",
            category: ProjectCategory::Community,
            image: "",
            full_description: "",
            date: "20/06/2024",
        },
    ];

    #[test]
    fn test_filter_all() {
        let all = filter_by_category(&PROJECTS, None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_by_category() {
        let rescues = filter_by_category(&PROJECTS, Some(ProjectCategory::Rescue));
        assert_eq!(rescues.len(), 1);
        assert_eq!(rescues[0].id, "1");

        let partnerships = filter_by_category(&PROJECTS, Some(ProjectCategory::Partnership));
        assert!(partnerships.is_empty());
    }
}
