//! Prompt construction for the three generator endpoints. Pure string
//! building; every prompt demands "JSON array only" output, but nothing
//! downstream assumes the model obeys.

pub const IDEAS_TEMPERATURE: f32 = 0.8;
pub const COURSES_TEMPERATURE: f32 = 0.8;
pub const TRENDING_TEMPERATURE: f32 = 0.9;

pub const MAX_OUTPUT_TOKENS: u32 = 2000;

pub fn ideas_system() -> String {
    "You are a creative business advisor. Always return valid JSON arrays as requested."
        .to_string()
}

pub fn courses_system() -> String {
    "You are an expert educational advisor. Always return valid JSON arrays as requested."
        .to_string()
}

pub fn trending_system() -> String {
    "You are a market trends analyst. Always return valid JSON arrays as requested.".to_string()
}

pub fn ideas_prompt(hobby: &str) -> String {
    format!(
        r#"You are a creative business advisor specialized in monetizing hobbies. Generate 10 diverse, realistic money-making ideas for the hobby: "{hobby}".

Include both traditional and modern/trending approaches. Make them actionable and beginner-friendly.

For each idea, provide:
1. A catchy method name
2. Clear description (2-3 sentences)
3. Specific tools/platforms
4. Realistic earning potential in INR (Indian Rupees)
5. An appropriate emoji
6. A relevant source URL (learning resource, platform, or tutorial)

Return ONLY a JSON array with this exact structure:
[
  {{
    "method": "Method Name",
    "description": "Clear description of the opportunity",
    "tools": "Specific platforms or tools",
    "earnings": "₹X,XXX-₹X,XXX/month",
    "icon": "🎯",
    "source": "https://example.com/relevant-guide"
  }}
]"#
    )
}

pub fn courses_prompt(hobby: &str) -> String {
    format!(
        r#"You are an expert educational advisor specializing in online learning and skill development.
Generate personalized FREE course recommendations for someone interested in: {hobby}.

IMPORTANT: Focus on FREE learning resources, especially YouTube channels, playlists, and free online courses.

Return EXACTLY 6 high-quality, diverse FREE course/resource recommendations in valid JSON format.
Each course should be realistic and tailored to different skill levels.

For each recommendation, provide:
- YouTube channel or playlist URL (if available)
- Free course platform links (Coursera free courses, edX, Khan Academy, freeCodeCamp, etc.)
- Quality free tutorials

Return ONLY a JSON array with this structure:
[
  {{
    "title": "Course/Resource title",
    "hobby": "{hobby}",
    "provider": "YouTube / Coursera (Free) / edX / Khan Academy / etc.",
    "duration": "Time to complete (e.g., 8 weeks, 12 hours)",
    "rating": 4.5-5.0,
    "students": 1000-50000,
    "price": "Free",
    "level": "Beginner/Intermediate/Advanced/All Levels",
    "description": "Compelling 1-2 sentence description",
    "url": "Direct YouTube or course URL"
  }}
]"#
    )
}

pub fn trending_prompt() -> String {
    r#"You are a market trends analyst specializing in hobby monetization and side hustles.

Generate a list of the TOP 6 CURRENTLY TRENDING hobbies that have strong income potential right now.

Focus on:
- Emerging trends and popular interests
- Hobbies with proven monetization opportunities
- Realistic income ranges in INR (Indian Rupees)
- Current market demand

Return ONLY a JSON array with this exact structure:
[
  {
    "title": "Hobby name",
    "description": "Brief description of why it's trending and its income potential (2-3 sentences)",
    "category": "Category (e.g., Creative, Tech, Lifestyle, etc.)",
    "incomeRange": "₹X,XXX-₹X,XX,XXX/month",
    "trend": "rising/hot/stable",
    "icon": "🎯"
  }
]

Make sure all hobbies are currently relevant and have real market demand."#
        .to_string()
}
