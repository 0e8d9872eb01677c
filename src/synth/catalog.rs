// Read-only tables behind synthetic listings. Built once at startup and
// shared by reference; nothing here is mutated after construction.

/// One entry of the category taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered keyword table. Order decides ties during inference.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// First category (in table order) with a keyword contained in `text`,
    /// compared case-insensitively.
    pub fn infer(&self, text: &str) -> Option<&'static str> {
        let haystack = text.to_lowercase();
        self.entries
            .iter()
            .find(|c| c.keywords.iter().any(|k| haystack.contains(k)))
            .map(|c| c.id)
    }
}

/// Coarse grouping of a job title, used to pick description text and tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleGroup {
    Engineering,
    Data,
    Design,
    Other,
}

impl TitleGroup {
    pub fn of(title: &str) -> Self {
        fn has(title: &str, words: &[&str]) -> bool {
            words.iter().any(|w| title.contains(w))
        }
        let title = title.to_lowercase();

        if has(&title, &["developer", "engineer", "programmer", "software"]) {
            TitleGroup::Engineering
        } else if has(&title, &["data", "analyst", "scientist", "analytics"]) {
            TitleGroup::Data
        } else if has(&title, &["design"]) {
            TitleGroup::Design
        } else {
            TitleGroup::Other
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: CategoryTable,
    pub companies: Vec<&'static str>,
    /// (city, country) used when the query names no location.
    pub locations: Vec<(&'static str, &'static str)>,
    pub employment_types: Vec<&'static str>,
}

const CATEGORIES: &[Category] = &[
    Category {
        id: "software-development",
        keywords: &[
            "developer", "software", "engineer", "programmer", "python", "javascript", "java",
            "react", "frontend", "backend", "full stack", "devops", "rust", "golang", "linux",
        ],
    },
    Category {
        id: "data-science",
        keywords: &[
            "data", "analyst", "analytics", "machine learning", "scientist", "statistic",
        ],
    },
    Category {
        id: "design",
        keywords: &["designer", "design", "ux", "graphic", "figma", "illustrator", "creative"],
    },
    Category {
        id: "marketing",
        keywords: &["marketing", "seo", "content", "social media", "brand", "growth"],
    },
    Category {
        id: "sales",
        keywords: &["sales", "account executive", "business development", "account manager"],
    },
    Category {
        id: "customer-service",
        keywords: &["customer", "support", "call center", "help desk"],
    },
    Category {
        id: "finance",
        keywords: &["finance", "financial", "accountant", "accounting", "bookkeep", "auditor"],
    },
    Category {
        id: "healthcare",
        keywords: &["nurse", "doctor", "health", "medical", "clinical", "pharmac", "therapist"],
    },
    Category {
        id: "hr",
        keywords: &["human resources", "recruit", "talent", "people operations"],
    },
    Category {
        id: "project-management",
        keywords: &[
            "project manager", "project management", "scrum", "agile", "product manager",
            "program manager",
        ],
    },
];

const COMPANIES: &[&str] = &[
    "TechNova Solutions",
    "DataSphere Analytics",
    "CloudPeak Systems",
    "BrightPath Digital",
    "Quantum Leap Labs",
    "GreenLeaf Ventures",
    "NexGen Software",
    "BlueWave Technologies",
    "Apex Innovations",
    "Horizon Health Partners",
];

const LOCATIONS: &[(&str, &str)] = &[
    ("San Francisco", "US"),
    ("New York", "US"),
    ("Austin", "US"),
    ("Seattle", "US"),
    ("Chicago", "US"),
    ("Boston", "US"),
];

const EMPLOYMENT_TYPES: &[&str] = &["FULLTIME", "FULLTIME", "CONTRACTOR", "PARTTIME"];

const SOFTWARE_TITLES: &[&str] = &[
    "{X} Developer",
    "Senior {X} Engineer",
    "{X} Backend Engineer",
    "Lead {X} Developer",
];
const DATA_TITLES: &[&str] = &[
    "{X} Analyst",
    "Senior {X} Scientist",
    "{X} Engineer",
    "{X} Analytics Manager",
];
const DESIGN_TITLES: &[&str] = &[
    "{X} Designer",
    "Senior {X} Designer",
    "{X} Design Lead",
    "Junior {X} Designer",
];
const GENERIC_TITLES: &[&str] = &["{X} Specialist", "Senior {X} Associate", "{X} Coordinator"];

impl Catalog {
    pub fn standard() -> Self {
        Self {
            categories: CategoryTable::new(CATEGORIES.to_vec()),
            companies: COMPANIES.to_vec(),
            locations: LOCATIONS.to_vec(),
            employment_types: EMPLOYMENT_TYPES.to_vec(),
        }
    }

    /// Title templates for a category; `{X}` is replaced by the query subject.
    pub fn title_templates(&self, category: Option<&str>) -> &'static [&'static str] {
        match category {
            Some("software-development") => SOFTWARE_TITLES,
            Some("data-science") => DATA_TITLES,
            Some("design") => DESIGN_TITLES,
            _ => GENERIC_TITLES,
        }
    }

    pub fn tools(&self, group: TitleGroup) -> &'static [&'static str] {
        match group {
            TitleGroup::Engineering => &[
                "Python", "JavaScript", "React", "Node.js", "AWS", "Docker", "Kubernetes",
            ],
            TitleGroup::Data => &["Python", "SQL", "Pandas", "TensorFlow", "Tableau", "Spark"],
            TitleGroup::Design => &[
                "Figma", "Sketch", "Adobe Creative Suite", "Prototyping", "User Research",
            ],
            TitleGroup::Other => &[
                "Microsoft Office", "Google Workspace", "Salesforce", "Jira", "Slack",
            ],
        }
    }
}
