// Integration tests (native) for the `banana-quest` crate.
// These drive the quiz through its public API with a hand-fed clock so they
// run under `cargo test` on the host.

use banana_quest::config::{DEFAULT_ADVANCE_DELAY_MS, DEFAULT_WRONG_CLEAR_MS};
use banana_quest::{AnswerOutcome, Feedback, Letter, Mood, QuizSession, ALPHABET_LEN};

fn letter(i: usize) -> Letter {
    Letter::from_index(i).unwrap()
}

#[test]
fn correct_answer_rewards_once_and_advances_after_delay() {
    for start in 0..ALPHABET_LEN {
        let mut quiz = QuizSession::default();
        for _ in 0..start {
            quiz.advance();
        }
        let target = quiz.current_target().unwrap();
        assert_eq!(target.index(), start);

        let outcome = quiz.submit_answer(target, 0.0);
        assert_eq!(outcome, AnswerOutcome::Correct { rewards: 1 });
        assert_eq!(quiz.current_index(), start);

        quiz.tick(DEFAULT_ADVANCE_DELAY_MS);
        assert_eq!(quiz.reward_count(), 1);
        assert_eq!(quiz.current_index(), (start + 1).min(ALPHABET_LEN - 1));
        assert_eq!(quiz.feedback(target), Feedback::None);
    }
}

#[test]
fn wrong_answer_changes_nothing_but_its_own_feedback() {
    let mut quiz = QuizSession::default();
    quiz.advance();
    quiz.advance();
    let target = quiz.current_target().unwrap();
    for wrong in Letter::all().filter(|l| *l != target) {
        assert_eq!(quiz.submit_answer(wrong, 0.0), AnswerOutcome::Wrong);
        assert_eq!(quiz.feedback(wrong), Feedback::Wrong);
    }
    assert_eq!(quiz.reward_count(), 0);
    assert_eq!(quiz.current_index(), 2);

    quiz.tick(DEFAULT_WRONG_CLEAR_MS);
    assert!(quiz.snapshot().feedback.is_empty());
    assert_eq!(quiz.current_index(), 2);
}

#[test]
fn advance_at_last_letter_stays_put() {
    let mut quiz = QuizSession::default();
    for _ in 0..ALPHABET_LEN + 5 {
        quiz.advance();
    }
    assert_eq!(quiz.current_index(), ALPHABET_LEN - 1);
    quiz.advance();
    assert_eq!(quiz.current_index(), ALPHABET_LEN - 1);
    assert_eq!(quiz.current_target().map(|l| l.as_char()), Some('Z'));
}

#[test]
fn retreat_at_first_letter_stays_put() {
    let mut quiz = QuizSession::default();
    quiz.retreat();
    assert_eq!(quiz.current_index(), 0);
    quiz.advance();
    quiz.retreat();
    quiz.retreat();
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.reward_count(), 0);
}

#[test]
fn retreat_clears_feedback() {
    let mut quiz = QuizSession::default();
    quiz.advance();
    quiz.submit_answer(letter(5), 0.0);
    quiz.retreat();
    assert_eq!(quiz.feedback(letter(5)), Feedback::None);
    assert_eq!(quiz.pending_timers(), 0);
}

#[test]
fn full_playthrough_collects_every_banana() {
    let mut quiz = QuizSession::default();
    let mut now = 0.0;
    for i in 0..ALPHABET_LEN {
        assert_eq!(quiz.current_index(), i);
        quiz.submit_answer(letter(i), now);
        now += DEFAULT_ADVANCE_DELAY_MS;
        quiz.tick(now);
        now += 16.0;
    }
    assert_eq!(quiz.reward_count(), 26);
    assert_eq!(quiz.current_index(), 25);
    assert!(quiz.is_finished());

    let snap = quiz.snapshot();
    assert_eq!(snap.progress_percent, 100);
    assert_eq!(snap.mood, Mood::Joyful);
    assert!(snap.sparkles);
}

#[test]
fn correct_then_manual_next_moves_forward_exactly_once() {
    let mut quiz = QuizSession::default();
    quiz.submit_answer(letter(0), 0.0);
    quiz.tick(100.0);
    quiz.advance();
    assert_eq!(quiz.current_index(), 1);
    quiz.tick(DEFAULT_ADVANCE_DELAY_MS);
    quiz.tick(DEFAULT_ADVANCE_DELAY_MS * 10.0);
    assert_eq!(quiz.current_index(), 1);
    assert_eq!(quiz.current_target(), Some(letter(1)));
    assert_eq!(quiz.reward_count(), 1);
}

#[test]
fn timers_only_fire_when_ticked() {
    let mut quiz = QuizSession::default();
    quiz.submit_answer(letter(0), 1_000.0);
    quiz.tick(1_000.0 + DEFAULT_ADVANCE_DELAY_MS - 1.0);
    assert_eq!(quiz.current_index(), 0);
    assert!(quiz.has_pending_advance());
    quiz.tick(1_000.0 + DEFAULT_ADVANCE_DELAY_MS);
    assert_eq!(quiz.current_index(), 1);
    assert!(!quiz.has_pending_advance());
}

#[test]
fn snapshot_tracks_mascot_mood() {
    let mut quiz = QuizSession::default();
    let mut now = 0.0;
    let mut moods = Vec::new();
    for i in 0..6 {
        quiz.submit_answer(letter(i), now);
        now += 1_000.0;
        quiz.tick(now);
        moods.push(quiz.snapshot().mood);
    }
    assert_eq!(
        moods,
        vec![Mood::Neutral, Mood::Happy, Mood::Happy, Mood::Happy, Mood::Joyful, Mood::Joyful]
    );
}
