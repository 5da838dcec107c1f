//! Static quiz catalog and scoring.
//!
//! The catalog is built once at startup and never mutated, so concurrent
//! reads from request handlers are safe without locking. Scoring follows the
//! floor-average rule: the average per-question score, floored and shifted
//! down by one, indexes the quiz's ordered result texts.

use crate::error::{Error, Result};
use crate::models::quiz::{QuizAnswer, QuizDefinition, QuizQuestion};
use rand::Rng;
use std::sync::LazyLock;

/// Sentinel returned when a quiz carries no result texts at all.
const NO_RESULT_TEXT: &str = "No result found";

/// The outcome of scoring one quiz submission.
#[derive(Debug, Clone)]
pub struct ScoredSubmission {
    pub title: String,
    pub answers: Vec<QuizAnswer>,
    pub total_score: i32,
    pub result_text: String,
}

static CATALOG: LazyLock<Vec<QuizDefinition>> = LazyLock::new(build_catalog);

/// Returns the static quiz catalog.
pub fn catalog() -> &'static [QuizDefinition] {
    &CATALOG
}

/// Looks up a quiz definition by id.
pub fn find_quiz(quiz_id: i32) -> Result<&'static QuizDefinition> {
    CATALOG
        .iter()
        .find(|q| q.id == quiz_id)
        .ok_or_else(|| Error::NotFound("Quiz not found".to_string()))
}

/// Picks one quiz uniformly at random from the catalog.
pub fn pick_random() -> &'static QuizDefinition {
    let index = rand::rng().random_range(0..CATALOG.len());
    &CATALOG[index]
}

/// Scores a quiz submission.
///
/// `answers` is aligned by position to the quiz's questions; a `None` entry
/// means the question was left unanswered. Each answered position resolves
/// the selected option label and its score from the quiz's parallel
/// options/scores arrays.
///
/// # Errors
/// * `NotFound` - unknown quiz id
/// * `Validation` - no questions answered, an answer position beyond the
///   question list, or an option index beyond the option list
pub fn score(quiz_id: i32, answers: &[Option<usize>]) -> Result<ScoredSubmission> {
    let quiz = find_quiz(quiz_id)?;

    let mut total_score = 0;
    let mut formatted_answers = Vec::new();

    for (position, answer) in answers.iter().enumerate() {
        let Some(selected_index) = answer else {
            continue;
        };

        let question = quiz.questions.get(position).ok_or_else(|| {
            Error::Validation(format!(
                "Answer position {} is beyond the quiz's {} questions",
                position,
                quiz.questions.len()
            ))
        })?;

        // Options and scores are parallel arrays; one bounds check covers both.
        let (Some(selected_option), Some(score)) = (
            question.options.get(*selected_index),
            question.scores.get(*selected_index).copied(),
        ) else {
            return Err(Error::Validation(format!(
                "Option index {} is out of range for question {}",
                selected_index, position
            )));
        };

        total_score += score;
        formatted_answers.push(QuizAnswer {
            question: question.question.clone(),
            selected_option: selected_option.clone(),
            score,
        });
    }

    // Guard the zero-answer case before dividing.
    if formatted_answers.is_empty() {
        return Err(Error::Validation(
            "You must answer at least one question".to_string(),
        ));
    }

    let average = f64::from(total_score) / formatted_answers.len() as f64;
    let result_text = bucket_result(quiz, average);

    Ok(ScoredSubmission {
        title: quiz.title.clone(),
        answers: formatted_answers,
        total_score,
        result_text,
    })
}

/// Maps an average per-question score to a result text.
///
/// Bucket index is `floor(average) - 1` clamped to the valid range, so an
/// all-lowest submission (average 1.0) lands on the first bucket and an
/// all-highest one on the last.
fn bucket_result(quiz: &QuizDefinition, average: f64) -> String {
    if quiz.result_texts.is_empty() {
        return NO_RESULT_TEXT.to_string();
    }

    let index = (average.floor() as i64 - 1).clamp(0, quiz.result_texts.len() as i64 - 1);
    quiz.result_texts[index as usize].clone()
}

fn build_catalog() -> Vec<QuizDefinition> {
    vec![
        QuizDefinition {
            id: 1,
            title: "How stressed are you?".to_string(),
            questions: vec![
                question(
                    "How often do you feel overwhelmed?",
                    &["Rarely", "Sometimes", "Often", "All the time"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "Do you struggle with sleep?",
                    &["No", "Occasionally", "Frequently", "Always"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "How often do you feel you have too much to do?",
                    &["Rarely", "Sometimes", "Often", "Constantly"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "Do you experience physical symptoms like headaches or tension?",
                    &["Never", "Occasionally", "Often", "Very Often"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "How easy is it for you to relax after a busy day?",
                    &["Very easy", "Somewhat easy", "Difficult", "Almost impossible"],
                    &[1, 2, 3, 4],
                ),
            ],
            result_texts: vec![
                "You're doing great!".to_string(),
                "Mild stress detected.".to_string(),
                "You seem stressed.".to_string(),
                "High stress levels – consider help.".to_string(),
            ],
        },
        QuizDefinition {
            id: 2,
            title: "Are you feeling anxious?".to_string(),
            questions: vec![
                question(
                    "Do you worry about the future?",
                    &["Not at all", "A little", "Often", "All the time"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "How often do you experience restlessness?",
                    &["Rarely", "Sometimes", "Frequently", "Constantly"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "Do you have trouble concentrating due to worry?",
                    &["Never", "Sometimes", "Often", "Always"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "Do you feel tense or on edge frequently?",
                    &["No", "Occasionally", "Most days", "Almost every day"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "How often do you feel your heart racing without physical exertion?",
                    &["Never", "Rarely", "Often", "Very often"],
                    &[1, 2, 3, 4],
                ),
            ],
            result_texts: vec![
                "Calm and collected!".to_string(),
                "Slight anxiety signs.".to_string(),
                "Noticeable anxiety.".to_string(),
                "High anxiety – consider support.".to_string(),
            ],
        },
        QuizDefinition {
            id: 3,
            title: "Student Stress and Focus Quiz".to_string(),
            questions: vec![
                question(
                    "How often do you feel overwhelmed with assignments?",
                    &["Never", "Rarely", "Often", "Always"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "How many hours do you sleep on average during the semester?",
                    &["Less than 4", "4-6", "6-8", "More than 8"],
                    &[1, 2, 3, 4],
                ),
                question(
                    "Do you find it easy to focus during online classes?",
                    &["Always", "Most times", "Sometimes", "Never"],
                    &[4, 3, 2, 1],
                ),
                question(
                    "How often do you feel motivated to study?",
                    &["Always", "Most times", "Sometimes", "Rarely"],
                    &[4, 3, 2, 1],
                ),
                question(
                    "How would you describe your current mental state?",
                    &["Focused and calm", "Anxious but managing", "Stressed", "Burnt out"],
                    &[4, 3, 2, 1],
                ),
            ],
            result_texts: vec![
                "You're focused and doing well!".to_string(),
                "Some signs of academic stress.".to_string(),
                "You seem to be struggling.".to_string(),
                "You're burnt out - time to talk to someone.".to_string(),
            ],
        },
    ]
}

fn question(text: &str, options: &[&str], scores: &[i32]) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        scores: scores.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_well_formed_quizzes() {
        let quizzes = catalog();
        assert_eq!(quizzes.len(), 3);
        for quiz in quizzes {
            assert_eq!(quiz.questions.len(), 5);
            assert_eq!(quiz.result_texts.len(), 4);
            for q in &quiz.questions {
                assert_eq!(q.options.len(), q.scores.len());
            }
        }
    }

    #[test]
    fn test_find_quiz_unknown_id() {
        assert!(matches!(find_quiz(99), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_pick_random_returns_catalog_member() {
        for _ in 0..20 {
            let quiz = pick_random();
            assert!(catalog().iter().any(|q| q.id == quiz.id));
        }
    }

    #[test]
    fn test_score_all_lowest_options_hits_first_bucket() {
        // All lowest-score options: total 5, average 1.0, floor(1.0) - 1 = 0
        // after clamping from -1.
        let result = score(1, &[Some(0), Some(0), Some(0), Some(0), Some(0)]).unwrap();
        assert_eq!(result.total_score, 5);
        assert_eq!(result.answers.len(), 5);
        assert_eq!(result.result_text, "You're doing great!");
    }

    #[test]
    fn test_score_all_highest_options_hits_last_bucket() {
        let result = score(1, &[Some(3), Some(3), Some(3), Some(3), Some(3)]).unwrap();
        assert_eq!(result.total_score, 20);
        assert_eq!(result.result_text, "High stress levels – consider help.");
    }

    #[test]
    fn test_score_skips_unanswered_questions() {
        // Two answered questions at index 2 (score 3 each): average 3.0,
        // bucket floor(3.0) - 1 = 2.
        let result = score(1, &[Some(2), None, Some(2), None, None]).unwrap();
        assert_eq!(result.total_score, 6);
        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.result_text, "You seem stressed.");
    }

    #[test]
    fn test_score_records_selected_option_labels() {
        let result = score(1, &[Some(1)]).unwrap();
        assert_eq!(result.answers[0].question, "How often do you feel overwhelmed?");
        assert_eq!(result.answers[0].selected_option, "Sometimes");
        assert_eq!(result.answers[0].score, 2);
    }

    #[test]
    fn test_score_reversed_scale_quiz() {
        // Quiz 3 mixes ascending and descending score scales; first options
        // of questions 3-5 score 4, not 1.
        let result = score(3, &[Some(0), Some(0), Some(0), Some(0), Some(0)]).unwrap();
        assert_eq!(result.total_score, 1 + 1 + 4 + 4 + 4);
    }

    #[test]
    fn test_score_no_answers_is_validation_error() {
        assert!(matches!(score(1, &[]), Err(Error::Validation(_))));
        assert!(matches!(
            score(1, &[None, None, None, None, None]),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_score_unknown_quiz() {
        assert!(matches!(score(42, &[Some(0)]), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_score_option_index_out_of_range() {
        assert!(matches!(score(1, &[Some(9)]), Err(Error::Validation(_))));
    }

    #[test]
    fn test_score_too_many_answer_positions() {
        let answers = vec![Some(0); 6];
        assert!(matches!(score(1, &answers), Err(Error::Validation(_))));
    }

    #[test]
    fn test_bucket_boundaries_follow_floor_average() {
        let quiz = find_quiz(1).unwrap();
        // average 1.8 -> floor 1 -> index 0
        assert_eq!(bucket_result(quiz, 1.8), "You're doing great!");
        // average 2.0 -> floor 2 -> index 1
        assert_eq!(bucket_result(quiz, 2.0), "Mild stress detected.");
        // average 3.9 -> floor 3 -> index 2
        assert_eq!(bucket_result(quiz, 3.9), "You seem stressed.");
        // average 4.0 -> floor 4 -> index 3
        assert_eq!(bucket_result(quiz, 4.0), "High stress levels – consider help.");
    }
}
