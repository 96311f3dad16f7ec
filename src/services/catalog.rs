use crate::models::{AssessmentQuestion, ContentItem, DashboardOverview, FormatUsage};

fn question(
    id: u32,
    question_text: &str,
    visual_answer: &str,
    auditory_answer: &str,
    kinesthetic_answer: &str,
) -> AssessmentQuestion {
    AssessmentQuestion {
        id,
        question_text: question_text.to_string(),
        visual_answer: visual_answer.to_string(),
        auditory_answer: auditory_answer.to_string(),
        kinesthetic_answer: kinesthetic_answer.to_string(),
    }
}

/// The questionnaire, in presentation order
pub fn assessment_questions() -> Vec<AssessmentQuestion> {
    vec![
        question(
            1,
            "When learning something new, I prefer to:",
            "See diagrams, charts, and visual representations",
            "Listen to explanations and discussions",
            "Try it out hands-on and practice",
        ),
        question(
            2,
            "I remember information best when I:",
            "Write it down or see it written",
            "Hear it spoken or discuss it",
            "Do something with it or experience it",
        ),
        question(
            3,
            "When studying, I like to:",
            "Use highlighters, mind maps, and visual notes",
            "Read aloud or discuss with others",
            "Take breaks and move around",
        ),
        question(
            4,
            "I learn best from:",
            "Pictures, videos, and demonstrations",
            "Lectures, podcasts, and group discussions",
            "Experiments, building, and hands-on activities",
        ),
        question(
            5,
            "When I need to understand something complex:",
            "I draw diagrams or create visual representations",
            "I talk through it or explain it to someone",
            "I try to build or create a model of it",
        ),
    ]
}

const SAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[allow(clippy::too_many_arguments)]
fn content(
    id: u32,
    title: &str,
    description: &str,
    subject: &str,
    difficulty_level: &str,
    duration_minutes: u32,
    text_content: &str,
    learning_objectives: &[&str],
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        subject: subject.to_string(),
        difficulty_level: difficulty_level.to_string(),
        duration_minutes,
        video_url: Some(SAMPLE_VIDEO_URL.to_string()),
        audio_url: None,
        text_content: Some(text_content.to_string()),
        interactive_url: None,
        learning_objectives: learning_objectives.iter().map(|s| s.to_string()).collect(),
    }
}

/// The content catalog, in recommendation order
pub fn content_catalog() -> Vec<ContentItem> {
    vec![
        content(
            1,
            "Introduction to Machine Learning",
            "Learn the fundamentals of machine learning and artificial intelligence",
            "Computer Science",
            "Beginner",
            45,
            "Machine learning is a subset of artificial intelligence that focuses on algorithms that can learn from data...",
            &[
                "Understand basic ML concepts",
                "Learn about different types of learning",
                "Explore real-world applications",
            ],
        ),
        content(
            2,
            "Web Development Fundamentals",
            "Master the basics of HTML, CSS, and JavaScript",
            "Web Development",
            "Beginner",
            60,
            "Web development involves creating websites and web applications using various technologies...",
            &[
                "Learn HTML structure",
                "Style with CSS",
                "Add interactivity with JavaScript",
            ],
        ),
        content(
            3,
            "Data Science with Python",
            "Analyze data and create visualizations using Python",
            "Data Science",
            "Intermediate",
            90,
            "Data science combines statistics, programming, and domain expertise to extract insights from data...",
            &[
                "Learn pandas for data manipulation",
                "Create visualizations with matplotlib",
                "Perform statistical analysis",
            ],
        ),
    ]
}

/// Find a catalog entry by id
pub fn find_content(id: u32) -> Option<ContentItem> {
    content_catalog().into_iter().find(|item| item.id == id)
}

/// Leading slice of the catalog
///
/// A negative `limit` drops that many entries from the end instead, clamped
/// at an empty list.
pub fn recommendations(limit: i64) -> Vec<ContentItem> {
    let catalog = content_catalog();
    let len = catalog.len() as i64;
    let take = if limit >= 0 { limit.min(len) } else { (len + limit).max(0) };
    catalog.into_iter().take(take as usize).collect()
}

/// Fixed dashboard statistics
pub fn dashboard_overview() -> DashboardOverview {
    DashboardOverview {
        total_time_minutes: 120,
        content_completed: 2,
        content_in_progress: 1,
        assessment_completed: true,
        format_usage: FormatUsage {
            video: 5,
            text: 3,
            audio: 1,
            interactive: 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_are_ordered() {
        let ids: Vec<u32> = assessment_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_recommendation_limits() {
        assert_eq!(recommendations(1).len(), 1);
        assert_eq!(recommendations(6).len(), 3);
        assert_eq!(recommendations(0).len(), 0);
        assert_eq!(recommendations(-1).len(), 2);
        assert_eq!(recommendations(-10).len(), 0);
    }

    #[test]
    fn test_find_content() {
        assert_eq!(find_content(2).unwrap().title, "Web Development Fundamentals");
        assert!(find_content(42).is_none());
    }
}
