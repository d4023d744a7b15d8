use wordle_game::core::{CellFeedback, Cursor, WORD_LENGTH, Word, score};
use wordle_game::game::{Event, Game, GameConfig, Outcome, RoundStatus};
use wordle_game::wordlists::{FixedWordSource, RandomWordSource, WORDS, loader::embedded};

fn fixed_game(answer: &str) -> Game<FixedWordSource> {
    Game::new(
        GameConfig::default(),
        FixedWordSource::single(Word::new(answer).unwrap()),
    )
}

fn submit<S: wordle_game::wordlists::WordSource>(game: &mut Game<S>, word: &str) -> Outcome {
    for ch in word.chars() {
        game.apply(Event::Letter(ch));
    }
    game.apply(Event::Submit)
}

#[test]
fn every_dictionary_word_scores_all_correct_against_itself() {
    let dictionary = embedded().unwrap();
    for word in dictionary.words() {
        assert_eq!(
            score(word.letters(), word),
            [CellFeedback::Correct; WORD_LENGTH],
            "{word} did not match itself"
        );
    }
}

#[test]
fn letters_missing_from_answer_are_always_absent() {
    let dictionary = embedded().unwrap();
    let answer = Word::new("crane").unwrap();
    for guess in dictionary.words().iter().take(200) {
        let feedback = score(guess.letters(), &answer);
        for (letter, cell) in guess.letters().iter().zip(feedback) {
            if !answer.contains(*letter) {
                assert_eq!(cell, CellFeedback::Absent, "{letter} in {guess}");
            }
        }
    }
}

#[test]
fn full_round_win() {
    let mut game = fixed_game("crane");

    assert_eq!(submit(&mut game, "CRATE"), Outcome::Applied);
    assert_eq!(
        game.snapshot().feedback[0],
        [
            CellFeedback::Correct,
            CellFeedback::Correct,
            CellFeedback::Correct,
            CellFeedback::Absent,
            CellFeedback::Correct,
        ]
    );

    submit(&mut game, "CRANE");
    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, RoundStatus::Won);
    assert_eq!(snapshot.feedback[1], [CellFeedback::Correct; WORD_LENGTH]);
    assert_eq!(snapshot.revealed_answer(), None);
}

#[test]
fn submit_moves_to_next_row_start_from_any_column() {
    let mut game = fixed_game("crane");
    for ch in "SLATEX".chars() {
        game.apply(Event::Letter(ch));
    }
    assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });

    game.apply(Event::Submit);
    assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
}

#[test]
fn exhausting_rows_loses_and_reveals() {
    let mut game = fixed_game("crane");
    for _ in 0..6 {
        submit(&mut game, "BLIMP");
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, RoundStatus::Lost);
    assert_eq!(snapshot.revealed_answer().map(Word::text), Some("CRANE"));
    assert_eq!(submit(&mut game, "CRANE"), Outcome::Ignored);
}

#[test]
fn reset_always_returns_to_clean_board() {
    let mut game = Game::new(
        GameConfig::default(),
        RandomWordSource::seeded(embedded().unwrap(), 99),
    );

    for round in 0..5 {
        for _ in 0..round {
            submit(&mut game, "BLIMP");
        }
        game.apply(Event::Letter('A'));

        assert_eq!(game.apply(Event::Reset), Outcome::Applied);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, RoundStatus::Playing);
        assert_eq!(snapshot.cursor, Cursor { row: 0, col: 0 });
        assert!(snapshot.grid.iter().flatten().all(Option::is_none));
        assert!(
            snapshot
                .feedback
                .iter()
                .flatten()
                .all(|&c| c == CellFeedback::Unknown)
        );
        let answer = snapshot.answer.text().to_lowercase();
        assert!(WORDS.contains(&answer.as_str()));
    }
}

#[test]
fn invalid_events_leave_state_unchanged() {
    let mut game = fixed_game("crane");
    let start = game.snapshot();

    assert_eq!(game.apply(Event::Submit), Outcome::Ignored);
    assert_eq!(game.apply(Event::Letter('a')), Outcome::Ignored);
    assert_eq!(game.apply(Event::Letter('7')), Outcome::Ignored);
    assert_eq!(game.snapshot(), start);
}
