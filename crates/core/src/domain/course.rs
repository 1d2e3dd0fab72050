use serde::{Deserialize, Serialize};

/// One course or free learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub hobby: String,
    pub provider: String,
    pub duration: String,
    pub rating: f64,
    pub students: u32,
    pub price: String,
    pub level: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fallback course batch for a topic. Titles, descriptions, and the search
/// URLs substitute the topic; ratings and student counts are fixed literals.
pub fn default_courses(hobby: &str) -> Vec<Course> {
    vec![
        Course {
            title: format!("Complete {hobby} Masterclass"),
            hobby: hobby.to_string(),
            provider: "Udemy".to_string(),
            duration: "8 weeks".to_string(),
            rating: 4.7,
            students: 12_500,
            price: "₹3,999".to_string(),
            level: "Beginner to Advanced".to_string(),
            description: format!(
                "Master {hobby} from basics to advanced techniques with hands-on projects."
            ),
            url: Some(format!(
                "https://www.udemy.com/courses/search/?q={}",
                urlencoding::encode(hobby)
            )),
        },
        Course {
            title: format!("{hobby} Fundamentals"),
            hobby: hobby.to_string(),
            provider: "Coursera".to_string(),
            duration: "6 weeks".to_string(),
            rating: 4.6,
            students: 8_900,
            price: "₹3,199".to_string(),
            level: "Beginner".to_string(),
            description: format!(
                "Learn the essential foundations of {hobby} with expert instructors."
            ),
            url: Some(format!(
                "https://www.coursera.org/courses?query={}",
                urlencoding::encode(hobby)
            )),
        },
        Course {
            title: format!("Advanced {hobby} Techniques"),
            hobby: hobby.to_string(),
            provider: "Skillshare".to_string(),
            duration: "10 weeks".to_string(),
            rating: 4.8,
            students: 15_600,
            price: "₹4,799".to_string(),
            level: "Advanced".to_string(),
            description: format!(
                "Take your {hobby} skills to the next level with advanced strategies."
            ),
            url: Some(format!(
                "https://www.skillshare.com/browse/{}",
                urlencoding::encode(hobby)
            )),
        },
    ]
}

/// The fixed learning-hub catalog shown before any search.
pub fn sample_catalog() -> Vec<Course> {
    let course = |title: &str,
                  hobby: &str,
                  provider: &str,
                  duration: &str,
                  rating: f64,
                  students: u32,
                  price: &str,
                  level: &str,
                  description: &str| Course {
        title: title.to_string(),
        hobby: hobby.to_string(),
        provider: provider.to_string(),
        duration: duration.to_string(),
        rating,
        students,
        price: price.to_string(),
        level: level.to_string(),
        description: description.to_string(),
        url: None,
    };

    vec![
        course(
            "Complete Photography Masterclass",
            "Photography",
            "Skillshare",
            "8 weeks",
            4.8,
            12_500,
            "$49",
            "Beginner to Advanced",
            "Master photography from basics to advanced techniques including composition, lighting, and editing.",
        ),
        course(
            "Web Development Bootcamp 2024",
            "Coding",
            "Udemy",
            "12 weeks",
            4.9,
            45_000,
            "$79",
            "Beginner",
            "Learn HTML, CSS, JavaScript, React, and Node.js to become a full-stack developer.",
        ),
        course(
            "Digital Marketing Fundamentals",
            "Marketing",
            "Coursera",
            "6 weeks",
            4.7,
            8_900,
            "$39",
            "Intermediate",
            "Understand SEO, social media marketing, content strategy, and analytics.",
        ),
        course(
            "Graphic Design for Beginners",
            "Design",
            "LinkedIn Learning",
            "4 weeks",
            4.6,
            15_600,
            "$29",
            "Beginner",
            "Learn Adobe Photoshop, Illustrator, and design principles to create stunning visuals.",
        ),
        course(
            "Content Writing & Copywriting",
            "Writing",
            "Skillshare",
            "5 weeks",
            4.8,
            9_200,
            "$35",
            "All Levels",
            "Master the art of persuasive writing, blog posts, and engaging copy for businesses.",
        ),
        course(
            "Video Editing Pro Course",
            "Video Editing",
            "Udemy",
            "10 weeks",
            4.9,
            23_400,
            "$59",
            "Beginner to Advanced",
            "Learn Adobe Premiere Pro, After Effects, and create professional-quality videos.",
        ),
    ]
}

/// Case-insensitive substring search over title, hobby, and description.
/// A blank query matches everything.
pub fn search(catalog: &[Course], query: &str) -> Vec<Course> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&query)
                || c.hobby.to_lowercase().contains(&query)
                || c.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
