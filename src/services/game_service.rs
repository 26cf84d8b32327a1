use std::sync::Arc;

use crate::{
    clock::Clock,
    errors::{AppError, AppResult},
    models::{
        domain::ActiveRound,
        dto::response::{RoundQuestions, RoundResult},
    },
    repositories::RoundRepository,
    services::{
        progress_service::{round_score, ProgressService},
        question_generator::QuestionGenerator,
        user_locks::UserLocks,
    },
};

/// Hands out a daily round and grades it. Enforces one recorded round per day.
pub struct GameService {
    progress: Arc<ProgressService>,
    rounds: Arc<dyn RoundRepository>,
    generator: Arc<dyn QuestionGenerator>,
    clock: Arc<dyn Clock>,
    locks: Arc<UserLocks>,
    questions_per_round: usize,
}

impl GameService {
    pub fn new(
        progress: Arc<ProgressService>,
        rounds: Arc<dyn RoundRepository>,
        generator: Arc<dyn QuestionGenerator>,
        clock: Arc<dyn Clock>,
        questions_per_round: usize,
    ) -> Self {
        Self {
            progress,
            rounds,
            generator,
            clock,
            locks: Arc::new(UserLocks::new()),
            questions_per_round,
        }
    }

    pub async fn start_round(&self, username: &str) -> AppResult<RoundQuestions> {
        let _guard = self.locks.acquire(username).await;

        let student = self.progress.get_student(username).await?;
        let today = self.clock.today();
        if student.has_played_on(today) {
            return Err(already_played(username));
        }

        if let Some(round) = self.rounds.find(username).await? {
            if round.started_on == today {
                log::debug!("Resuming today's round for '{}'", username);
                return Ok(round_questions(round));
            }
        }

        let questions = self
            .generator
            .generate(student.grade, self.questions_per_round)
            .await
            .map_err(|e| {
                log::error!("Could not generate questions for '{}': {}", username, e);
                e
            })?;

        let round = ActiveRound {
            username: student.username,
            grade: student.grade,
            started_on: today,
            questions,
        };
        self.rounds.save(&round).await?;

        Ok(round_questions(round))
    }

    pub async fn submit_round(&self, username: &str, answers: &[Option<f64>]) -> AppResult<RoundResult> {
        let _guard = self.locks.acquire(username).await;

        let round = self
            .rounds
            .find(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No active round for '{}'", username)))?;

        if self.progress.has_played_today(username).await? {
            self.rounds.remove(username).await?;
            return Err(already_played(username));
        }

        let total_questions = round.questions.len();
        let correct_count = round.count_correct(answers);
        let score = round_score(correct_count, total_questions)?;

        let student = self
            .progress
            .update_student_after_game(username, score)
            .await?;
        self.rounds.remove(username).await?;

        Ok(RoundResult {
            score,
            correct_count,
            total_questions,
            student,
        })
    }
}

fn round_questions(round: ActiveRound) -> RoundQuestions {
    RoundQuestions {
        grade: round.grade,
        questions: round.questions.into_iter().map(|q| q.question).collect(),
    }
}

fn already_played(username: &str) -> AppError {
    AppError::AlreadyPlayedToday(format!("'{}' has already completed today's round", username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::FixedClock,
        models::domain::{MathQuestion, Student},
        repositories::{
            InMemoryKeyValueStore, KeyValueStore, KvRoundRepository, KvStudentRepository,
            StudentRepository,
        },
        services::question_generator::MockQuestionGenerator,
    };
    use chrono::NaiveDate;

    struct Fixture {
        students: Arc<KvStudentRepository>,
        rounds: Arc<KvRoundRepository>,
        clock: Arc<FixedClock>,
        game: GameService,
    }

    fn fixture(generator: MockQuestionGenerator) -> Fixture {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let students = Arc::new(KvStudentRepository::new(store.clone()));
        let rounds = Arc::new(KvRoundRepository::new(store));
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
        let progress = Arc::new(ProgressService::new(
            students.clone(),
            clock.clone(),
            Arc::new(UserLocks::new()),
        ));
        let game = GameService::new(progress, rounds.clone(), Arc::new(generator), clock.clone(), 3);

        Fixture {
            students,
            rounds,
            clock,
            game,
        }
    }

    fn three_questions() -> Vec<MathQuestion> {
        vec![
            MathQuestion::new("2 + 2", 4.0),
            MathQuestion::new("6 * 7", 42.0),
            MathQuestion::new("9 - 3", 6.0),
        ]
    }

    #[tokio::test]
    async fn test_full_round_records_score() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|grade, count| *grade == 4 && *count == 3)
            .times(1)
            .returning(|_, _| Ok(three_questions()));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        let round = f.game.start_round("maya").await.unwrap();
        assert_eq!(round.questions, vec!["2 + 2", "6 * 7", "9 - 3"]);

        let result = f
            .game
            .submit_round("maya", &[Some(4.0), Some(41.0), Some(6.0)])
            .await
            .unwrap();
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.score, 67);
        assert_eq!(result.student.streak, 1);
        assert_eq!(result.student.highest_score, 67);
        assert!(f.rounds.find("maya").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_round_same_day_is_refused() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(three_questions()));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        f.game.start_round("maya").await.unwrap();
        f.game.submit_round("maya", &[]).await.unwrap();

        let result = f.game.start_round("maya").await;
        assert!(matches!(result, Err(AppError::AlreadyPlayedToday(_))));
    }

    #[tokio::test]
    async fn test_restarting_today_returns_the_same_questions() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(three_questions()));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        let first = f.game.start_round("maya").await.unwrap();
        let second = f.game.start_round("maya").await.unwrap();
        assert_eq!(first.questions, second.questions);

        let stored = f.rounds.find("maya").await.unwrap().unwrap();
        assert_eq!(stored.questions, three_questions());
    }

    #[tokio::test]
    async fn test_stale_round_from_yesterday_is_replaced() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(2)
            .returning(|_, _| Ok(three_questions()));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        f.game.start_round("maya").await.unwrap();
        f.clock.advance_days(1);
        f.game.start_round("maya").await.unwrap();

        let stored = f.rounds.find("maya").await.unwrap().unwrap();
        assert_eq!(stored.started_on, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[tokio::test]
    async fn test_round_started_yesterday_counts_for_today() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Ok(three_questions()));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        f.game.start_round("maya").await.unwrap();
        f.clock.advance_days(1);

        let result = f.game.submit_round("maya", &[Some(4.0)]).await.unwrap();
        assert_eq!(
            result.student.last_played_date,
            NaiveDate::from_ymd_opt(2024, 1, 3)
        );
    }

    #[tokio::test]
    async fn test_generator_failure_leaves_student_untouched() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(AppError::UpstreamError("boom".to_string())));
        let f = fixture(generator);
        f.students.create(Student::new("maya", 4)).await.unwrap();

        let result = f.game.start_round("maya").await;
        assert!(matches!(result, Err(AppError::UpstreamError(_))));

        let maya = f.students.find_by_username("maya").await.unwrap().unwrap();
        assert_eq!(maya, Student::new("maya", 4));
        assert!(f.rounds.find("maya").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_round_is_not_found() {
        let f = fixture(MockQuestionGenerator::new());
        f.students.create(Student::new("maya", 4)).await.unwrap();

        let result = f.game.submit_round("maya", &[Some(1.0)]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_student_cannot_start() {
        let f = fixture(MockQuestionGenerator::new());
        let result = f.game.start_round("ghost").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
