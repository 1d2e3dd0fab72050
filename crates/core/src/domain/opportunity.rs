use serde::{Deserialize, Serialize};

/// A local gig posting on the opportunity board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub budget: u32,
    /// Coarse recency bucket: "today", "week", or "month".
    pub date_posted: String,
}

/// The fixed six-gig sample board.
pub fn sample_opportunities() -> Vec<Opportunity> {
    let gig = |id: u32,
               title: &str,
               description: &str,
               location: &str,
               category: &str,
               budget: u32,
               date_posted: &str| Opportunity {
        id,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        budget,
        date_posted: date_posted.to_string(),
    };

    vec![
        gig(
            1,
            "Photographer Needed",
            "Looking for a photographer for a birthday party this weekend in Koregaon Park.",
            "koregaon-park",
            "photography",
            5_000,
            "today",
        ),
        gig(
            2,
            "Custom Cake Request",
            "Need a home baker for a themed cake for a child's birthday. Hinjewadi area.",
            "hinjewadi",
            "baking",
            3_000,
            "week",
        ),
        gig(
            3,
            "Logo Design for a New Cafe",
            "A new cafe in Viman Nagar is looking for a freelance graphic designer to create a logo.",
            "viman-nagar",
            "design",
            8_000,
            "week",
        ),
        gig(
            4,
            "Personal Fitness Trainer",
            "Looking for a certified fitness trainer for home sessions in Wakad area.",
            "wakad",
            "fitness",
            12_000,
            "today",
        ),
        gig(
            5,
            "Handmade Jewelry for Wedding",
            "Need a craftsperson to create custom jewelry pieces for a wedding in Kothrud.",
            "kothrud",
            "crafts",
            15_000,
            "month",
        ),
        gig(
            6,
            "Social Media Content Creator",
            "Small business in Koregaon Park needs monthly content creation for Instagram and Facebook.",
            "koregaon-park",
            "content",
            20_000,
            "week",
        ),
    ]
}
