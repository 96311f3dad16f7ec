use thiserror::Error;
use crate::models::{Answer, ClassificationResult, LearningStyle, ScoreTally};

/// Errors that can occur while scoring a questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Answers are required")]
    EmptyAnswers,
}

/// Score a questionnaire and pick the dominant learning style
///
/// Each answer with a recognized label adds one to that label's count;
/// unrecognized labels are skipped. The dominant style is the first style in
/// `LearningStyle::ALL` order holding the maximum count, so ties resolve to
/// visual, then auditory, then kinesthetic.
pub fn classify(answers: &[Answer]) -> Result<ClassificationResult, ClassifyError> {
    if answers.is_empty() {
        return Err(ClassifyError::EmptyAnswers);
    }

    let tally = tally_answers(answers);
    let dominant = dominant_style(&tally);

    Ok(ClassificationResult {
        dominant,
        tally,
        message: format!("Based on your answers, you are a {} learner!", dominant),
    })
}

/// Count answers per recognized label
pub fn tally_answers(answers: &[Answer]) -> ScoreTally {
    answers
        .iter()
        .filter_map(Answer::style)
        .fold(ScoreTally::default(), |mut tally, style| {
            tally.increment(style);
            tally
        })
}

/// First style in canonical order with the highest count
#[inline]
pub fn dominant_style(tally: &ScoreTally) -> LearningStyle {
    let mut best = LearningStyle::ALL[0];
    for style in LearningStyle::ALL.into_iter().skip(1) {
        // Strictly greater keeps the earlier style on ties
        if tally.get(style) > tally.get(best) {
            best = style;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(labels: &[&str]) -> Vec<Answer> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| Answer::new(i as i64 + 1, *label))
            .collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(classify(&[]), Err(ClassifyError::EmptyAnswers));
    }

    #[test]
    fn test_unanimous_label_wins() {
        let result = classify(&answers(&["kinesthetic", "kinesthetic", "kinesthetic"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Kinesthetic);
        assert_eq!(result.tally, ScoreTally { visual: 0, auditory: 0, kinesthetic: 3 });
    }

    #[test]
    fn test_ties_follow_canonical_order() {
        let result = classify(&answers(&["auditory", "visual"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Visual);

        let result = classify(&answers(&["kinesthetic", "auditory"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Auditory);

        let result = classify(&answers(&["kinesthetic", "auditory", "visual"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Visual);
    }

    #[test]
    fn test_unrecognized_labels_ignored() {
        let result = classify(&answers(&["reading", "auditory", "", "Visual"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Auditory);
        assert_eq!(result.tally.total(), 1);
    }

    #[test]
    fn test_only_unrecognized_labels_defaults_to_visual() {
        let result = classify(&answers(&["reading", "writing"])).unwrap();
        assert_eq!(result.dominant, LearningStyle::Visual);
        assert_eq!(result.tally, ScoreTally::default());
    }

    #[test]
    fn test_message_names_dominant_style() {
        let result = classify(&answers(&["auditory", "auditory", "visual"])).unwrap();
        assert_eq!(result.message, "Based on your answers, you are a auditory learner!");
    }
}
