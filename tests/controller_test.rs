//! Controller scenarios driven by a scripted frontend.

use std::collections::VecDeque;
use strictly_hangman_tui::{
    EmptyAnswer, Flow, Frontend, GameConfig, GameController, GameState, Keystroke, Letter, Prompt, SessionEnd, View,
    WordPool,
};

/// Frontend that replays keys and records every rendered view.
struct ScriptedFrontend {
    keys: VecDeque<Keystroke>,
    views: Vec<View>,
}

impl ScriptedFrontend {
    fn new(keys: impl IntoIterator<Item = Keystroke>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            views: Vec::new(),
        }
    }

    fn typed(text: &str) -> Self {
        Self::new(text.chars().map(|c| match c {
            '\n' => Keystroke::Enter,
            c => Keystroke::Char(c),
        }))
    }

    fn prompts(&self) -> Vec<Prompt> {
        self.views.iter().map(|v| v.prompt().clone()).collect()
    }

    fn last_view(&self) -> &View {
        self.views.last().expect("at least one view rendered")
    }
}

impl Frontend for ScriptedFrontend {
    fn render(&mut self, view: &View) -> anyhow::Result<()> {
        self.views.push(view.clone());
        Ok(())
    }

    fn read_key(&mut self) -> anyhow::Result<Keystroke> {
        self.keys
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of keys"))
    }
}

fn controller(word: &str, config: GameConfig) -> GameController {
    let pool = WordPool::from_words([word]).expect("valid pool");
    GameController::new(pool, &config.with_seed(1))
}

fn letter(c: char) -> Letter {
    Letter::try_from(c).unwrap()
}

#[test]
fn test_cat_round_is_won() {
    let mut game = controller("cat", GameConfig::default());
    let mut frontend = ScriptedFrontend::typed("azctn");

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Declined);

    let board = frontend.last_view().board();
    assert_eq!(board.word(), "C A T");
    assert_eq!(*board.chances(), 5);
    assert_eq!(board.wrong_guesses(), &vec![letter('Z')]);
    assert_eq!(*board.streak(), Some(1));
    assert!(matches!(frontend.last_view().prompt(), Prompt::Won(EmptyAnswer::Quit)));
    assert!(matches!(game.state(), GameState::Win(_)));
    assert_eq!(*game.summary().wins(), 1);
}

#[test]
fn test_dog_round_is_lost_and_word_revealed() {
    let mut game = controller("dog", GameConfig::default());
    let mut frontend = ScriptedFrontend::typed("qwertyn");

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Declined);

    let view = frontend.last_view();
    assert_eq!(*view.board().chances(), 0);
    assert_eq!(view.board().wrong_list(), "Q, W, E, R, T, Y");
    assert_eq!(
        view.prompt(),
        &Prompt::Lost {
            word: "DOG".to_string(),
            empty_answer: EmptyAnswer::Quit
        }
    );
    assert_eq!(game.streak(), Some(0));
    assert_eq!(*game.summary().losses(), 1);
}

#[test]
fn test_rejected_keys_reprompt_without_spending_chances() {
    let mut game = controller("cat", GameConfig::default());
    let mut frontend = ScriptedFrontend::new([
        Keystroke::Char('1'),
        Keystroke::Enter,
        Keystroke::Other,
        Keystroke::Char('a'),
        Keystroke::Char('A'),
        Keystroke::Char('a'),
        Keystroke::Char('c'),
        Keystroke::Char('t'),
        Keystroke::Char('n'),
    ]);

    game.run(&mut frontend).unwrap();

    let prompts = frontend.prompts();
    assert_eq!(
        &prompts[..7],
        &[
            Prompt::GuessLetter,
            Prompt::InvalidLetter,
            Prompt::InvalidLetter,
            Prompt::InvalidLetter,
            Prompt::GuessLetter,
            Prompt::AlreadyGuessed(letter('A')),
            Prompt::AlreadyGuessed(letter('A')),
        ]
    );
    assert!(frontend.views.iter().all(|v| *v.board().chances() == 6));
    assert!(frontend.last_view().board().wrong_guesses().is_empty());
}

#[test]
fn test_streak_counts_consecutive_wins_and_resets_on_loss() {
    let mut game = controller("a", GameConfig::default());
    // win, win, lose, win
    let mut frontend = ScriptedFrontend::typed("ayaybcdefgyan");

    game.run(&mut frontend).unwrap();

    let finished_streaks: Vec<_> = frontend
        .views
        .iter()
        .filter(|v| matches!(v.prompt(), Prompt::Won(_) | Prompt::Lost { .. }))
        .map(|v| *v.board().streak())
        .collect();
    assert_eq!(finished_streaks, vec![Some(1), Some(2), Some(0), Some(1)]);

    let summary = game.summary();
    assert_eq!(*summary.rounds(), 4);
    assert_eq!(*summary.wins(), 3);
    assert_eq!(*summary.losses(), 1);
    assert_eq!(*summary.best_streak(), 2);
}

#[test]
fn test_streak_disabled_is_hidden() {
    let mut game = controller("a", GameConfig::default().with_track_streak(false));
    let mut frontend = ScriptedFrontend::typed("ayan");

    game.run(&mut frontend).unwrap();

    assert!(frontend.views.iter().all(|v| v.board().streak().is_none()));
    assert_eq!(game.streak(), None);
}

#[test]
fn test_blank_answer_quits_by_default() {
    let mut game = controller("a", GameConfig::default());
    let mut frontend = ScriptedFrontend::typed("a\n");

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Declined);
}

#[test]
fn test_blank_answer_reprompts_when_configured() {
    let mut game = controller("a", GameConfig::default().with_empty_answer(EmptyAnswer::Reprompt));
    let mut frontend = ScriptedFrontend::typed("a\nxn");

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Declined);
    assert_eq!(
        frontend.prompts(),
        vec![
            Prompt::GuessLetter,
            Prompt::Won(EmptyAnswer::Reprompt),
            Prompt::InvalidAnswer(EmptyAnswer::Reprompt),
            Prompt::InvalidAnswer(EmptyAnswer::Reprompt),
        ]
    );
}

#[test]
fn test_ctrl_c_during_play_ends_session() {
    let mut game = controller("cat", GameConfig::default());
    let mut frontend = ScriptedFrontend::new([Keystroke::Char('z'), Keystroke::Interrupt]);

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Interrupted);
    match game.state() {
        GameState::Play(round) => assert_eq!(round.chances_remaining(), 5),
        other => panic!("Expected round in play, got {:?}", other),
    }
}

#[test]
fn test_ctrl_c_on_restart_question_ends_session() {
    let mut game = controller("a", GameConfig::default());
    let mut frontend = ScriptedFrontend::new([Keystroke::Char('a'), Keystroke::Interrupt]);

    assert_eq!(game.run(&mut frontend).unwrap(), SessionEnd::Interrupted);
    assert!(matches!(game.state(), GameState::Win(_)));
}

#[test]
fn test_step_walks_the_state_machine() {
    let mut game = controller("cat", GameConfig::default());
    let mut frontend = ScriptedFrontend::typed("c");

    assert_eq!(game.state(), &GameState::Start);
    assert_eq!(game.step(&mut frontend).unwrap(), Flow::Continue);
    assert!(frontend.views.is_empty(), "Start renders nothing");

    match game.state() {
        GameState::Play(round) => {
            assert_eq!(round.secret(), "CAT");
            assert_eq!(round.chances_remaining(), 6);
        }
        other => panic!("Expected Play, got {:?}", other),
    }

    assert_eq!(game.step(&mut frontend).unwrap(), Flow::Continue);
    match game.state() {
        GameState::Play(round) => assert_eq!(round.display_word(), "C__"),
        other => panic!("Expected Play, got {:?}", other),
    }
}

#[test]
fn test_exhausted_input_is_an_error() {
    let mut game = controller("cat", GameConfig::default());
    let mut frontend = ScriptedFrontend::typed("a");

    assert!(game.run(&mut frontend).is_err());
}
