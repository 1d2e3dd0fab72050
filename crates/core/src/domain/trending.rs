use serde::{Deserialize, Serialize};

/// One trending hobby with its monetization outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingHobby {
    pub title: String,
    pub description: String,
    pub category: String,
    pub income_range: String,
    pub trend: String,
    pub icon: String,
}

/// The fixed trending-hobbies fallback batch. Takes no topic; the list is
/// fully hand-authored.
pub fn default_trending() -> Vec<TrendingHobby> {
    let hobby = |title: &str, description: &str, category: &str, income_range: &str, trend: &str, icon: &str| {
        TrendingHobby {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            income_range: income_range.to_string(),
            trend: trend.to_string(),
            icon: icon.to_string(),
        }
    };

    vec![
        hobby(
            "Content Creation & Social Media",
            "Create engaging content on platforms like Instagram, YouTube, and TikTok. Monetize through brand partnerships, ads, and sponsorships.",
            "Digital",
            "₹20,000-₹5,00,000/month",
            "hot",
            "📱",
        ),
        hobby(
            "Digital Art & NFTs",
            "Create and sell digital artwork, illustrations, and NFTs. High demand for unique digital assets and custom commissions.",
            "Creative",
            "₹30,000-₹3,00,000/month",
            "rising",
            "🎨",
        ),
        hobby(
            "Fitness Coaching",
            "Online personal training, yoga instruction, or fitness consulting. Growing health consciousness drives demand.",
            "Lifestyle",
            "₹25,000-₹2,00,000/month",
            "hot",
            "💪",
        ),
        hobby(
            "Tech Tutorial & Coding",
            "Teach programming, web development, or tech skills through courses and tutorials. Ever-growing demand for tech education.",
            "Tech",
            "₹40,000-₹4,00,000/month",
            "stable",
            "💻",
        ),
        hobby(
            "Sustainable Crafts",
            "Create eco-friendly products like upcycled fashion, sustainable home decor. Rising environmental awareness fuels demand.",
            "Crafts",
            "₹15,000-₹1,50,000/month",
            "rising",
            "♻️",
        ),
        hobby(
            "Gaming & Streaming",
            "Stream gameplay, create gaming content, compete in esports. Massive and growing gaming industry with multiple revenue streams.",
            "Entertainment",
            "₹25,000-₹10,00,000/month",
            "hot",
            "🎮",
        ),
    ]
}
