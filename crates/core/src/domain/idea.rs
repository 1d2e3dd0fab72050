use serde::{Deserialize, Serialize};

/// One monetization idea for a hobby. Fields mirror what the ideas endpoint
/// asks the model to emit; `source` is absent on salvaged records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HobbyIdea {
    pub method: String,
    pub description: String,
    pub tools: String,
    pub earnings: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The fixed ten-idea fallback batch. Pure: the topic is substituted into
/// descriptions, everything else is a literal.
pub fn default_ideas(hobby: &str) -> Vec<HobbyIdea> {
    let idea = |method: &str, description: String, tools: &str, earnings: &str, icon: &str| {
        HobbyIdea {
            method: method.to_string(),
            description,
            tools: tools.to_string(),
            earnings: earnings.to_string(),
            icon: icon.to_string(),
            source: None,
        }
    };

    vec![
        idea(
            "Content Creation",
            format!("Start a social media presence showcasing your {hobby} skills and build an audience."),
            "Instagram, TikTok, YouTube",
            "₹8,000-₹1,60,000/month",
            "📱",
        ),
        idea(
            "Online Courses",
            format!("Teach others your {hobby} through structured online courses."),
            "Udemy, Skillshare, Teachable",
            "₹16,000-₹2,40,000/month",
            "🎓",
        ),
        idea(
            "Freelance Services",
            format!("Offer your {hobby} skills as services to clients."),
            "Fiverr, Upwork, Facebook",
            "₹2,000-₹16,000/hour",
            "💼",
        ),
        idea(
            "Local Workshops",
            format!("Host in-person {hobby} workshops in your community."),
            "Community centers, Eventbrite",
            "₹4,000-₹24,000/workshop",
            "🏫",
        ),
        idea(
            "Digital Products",
            format!("Create and sell templates, guides, or tools related to {hobby}."),
            "Etsy, Gumroad, own website",
            "₹24,000-₹2,40,000/month",
            "💾",
        ),
        idea(
            "Affiliate Marketing",
            format!("Review {hobby} products and earn commissions through affiliate links."),
            "Blog, YouTube, Amazon Associates",
            "₹16,000-₹1,60,000/month",
            "⭐",
        ),
        idea(
            "Coaching & Consulting",
            format!("Offer one-on-one coaching sessions to help others advance in {hobby}."),
            "Zoom, Calendly, social media",
            "₹4,000-₹24,000/hour",
            "🎯",
        ),
        idea(
            "Custom Products",
            format!("Design and sell custom {hobby}-related products using print-on-demand."),
            "Printful, Teespring, Etsy",
            "₹24,000-₹2,00,000/month",
            "🛍️",
        ),
        idea(
            "Subscription Service",
            format!("Create monthly boxes or content subscriptions for {hobby} enthusiasts."),
            "Cratejoy, Shopify, social media",
            "₹80,000-₹8,00,000/month",
            "📦",
        ),
        idea(
            "Event Hosting",
            format!("Organize {hobby}-themed events, meetups, or experiences."),
            "Eventbrite, Meetup, social media",
            "₹16,000-₹1,60,000/event",
            "🎉",
        ),
    ]
}
