//! Pure state transitions
//!
//! `apply(state, event) → state` is the only way a session moves. Events
//! that do not fit the current step are ignored, so callers never need to
//! pre-filter.

use crate::quiz::AnswerSheet;
use crate::session::event::QuizEvent;
use crate::session::state::{FetchStatus, QuizState, Step};

/// Advance the session by one event.
pub fn apply(mut state: QuizState, event: QuizEvent) -> QuizState {
    use QuizEvent::*;

    match event {
        BeginSetup if state.step == Step::Welcome => state.step = Step::TeamSetup,
        BackToWelcome if state.step == Step::TeamSetup => state.step = Step::Welcome,

        SetTeamName(value) if state.step == Step::TeamSetup => state.setup.team_name = value,
        SetTeamMembers(value) if state.step == Step::TeamSetup => state.setup.team_members = value,
        SetCurator(value) if state.step == Step::TeamSetup => state.setup.curator = value,
        SetGrade(grade) if state.step == Step::TeamSetup => state.setup.class_grade = grade,
        SetTopic(topic) if state.step == Step::TeamSetup => state.setup.topic = topic,

        FetchStarted if may_start_fetch(&state) => {
            state.step = Step::Quiz;
            state.fetch = FetchStatus::Loading;
        }
        RoundsLoaded(rounds)
            if state.step == Step::Quiz && state.fetch == FetchStatus::Loading =>
        {
            state.round_index = 0;
            state.question_index = 0;
            state.answers = AnswerSheet::for_rounds(&rounds);
            state.time_left = rounds
                .first()
                .map(|round| round.question_seconds(0))
                .unwrap_or(0);
            state.rounds = rounds;
            state.fetch = FetchStatus::Ready;
        }
        LoadFailed(message)
            if state.step == Step::Quiz && state.fetch == FetchStatus::Loading =>
        {
            state.fetch = FetchStatus::Failed(message);
        }

        Advance if state.showing_questions() => return advance(state),
        Retreat if state.showing_questions() => return retreat(state),
        SelectAnswer(option) if state.showing_questions() => {
            state
                .answers
                .select(state.round_index, state.question_index, option);
        }
        Tick if state.showing_questions() => {
            // Reaching zero performs exactly the advance transition
            if state.time_left <= 1 {
                return advance(state);
            }
            state.time_left -= 1;
        }

        // Team setup and loaded rounds are deliberately kept
        Restart if state.step == Step::Results => state.step = Step::Welcome,

        _ => {}
    }

    state
}

/// A fetch may start from a completed team setup, or re-start from the
/// quiz step while no questions are showing (retry after failure; a
/// re-trigger while loading is resolved by the controller cancelling the
/// previous task).
fn may_start_fetch(state: &QuizState) -> bool {
    match state.step {
        Step::TeamSetup => state.setup.is_complete(),
        Step::Quiz => state.fetch != FetchStatus::Ready,
        _ => false,
    }
}

fn advance(mut state: QuizState) -> QuizState {
    let Some(round) = state.current_round() else {
        return state;
    };

    if state.question_index + 1 < round.question_count() {
        state.question_index += 1;
    } else if state.round_index + 1 < state.rounds.len() {
        state.round_index += 1;
        state.question_index = 0;
    } else {
        state.step = Step::Results;
        return state;
    }

    rearm_timer(&mut state);
    state
}

fn retreat(mut state: QuizState) -> QuizState {
    if state.question_index > 0 {
        state.question_index -= 1;
    } else if state.round_index > 0 {
        state.round_index -= 1;
        state.question_index = state
            .current_round()
            .map(|round| round.question_count().saturating_sub(1))
            .unwrap_or(0);
    } else {
        // Very first question of the first round: no-op
        return state;
    }

    rearm_timer(&mut state);
    state
}

fn rearm_timer(state: &mut QuizState) {
    state.time_left = state
        .current_round()
        .map(|round| round.question_seconds(state.question_index))
        .unwrap_or(0);
}
