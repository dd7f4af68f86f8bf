//! Static keyword → course-list recommendations.

/// Course pool keyed by lowercase skill substrings. `ui` and `ux` share the
/// same pair of courses on purpose.
const COURSE_POOL: &[(&str, &[&str])] = &[
    (
        "data",
        &[
            "Data Science Course - Coursera",
            "Machine Learning A-Z - Udemy",
        ],
    ),
    (
        "ml",
        &["Machine Learning A-Z - Udemy", "AI & ML Specialization"],
    ),
    (
        "web",
        &["Full Stack Web Dev - FreeCodeCamp", "React JS Course"],
    ),
    (
        "android",
        &["Android Dev Bootcamp", "Kotlin Android Development"],
    ),
    ("ios", &["iOS Dev with Swift", "SwiftUI Masterclass"]),
    ("ui", &["UI/UX Design Bootcamp", "Figma Complete Guide"]),
    ("ux", &["UI/UX Design Bootcamp", "Figma Complete Guide"]),
];

pub const DEFAULT_TOP_N: usize = 5;

/// Collects courses for every keyword that appears as a substring of a
/// lower-cased skill, dedupes preserving first-seen order, and truncates to
/// `top_n`. Empty input or no matches is an empty list, not an error.
pub fn recommend(skills: &[String], top_n: usize) -> Vec<String> {
    let mut courses = Vec::new();
    for skill in skills {
        let skill = skill.to_lowercase();
        for (keyword, pool) in COURSE_POOL {
            if skill.contains(keyword) {
                for course in *pool {
                    let course = course.to_string();
                    if !courses.contains(&course) {
                        courses.push(course);
                    }
                }
            }
        }
    }
    courses.truncate(top_n);
    courses
}
