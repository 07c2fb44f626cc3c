//! Browser front-end: a plain DOM button grid driven by a `requestAnimationFrame`
//! loop. The loop feeds `performance.now()` into [`QuizSession::tick`] and
//! re-renders from the session snapshot; taps and key presses go straight into
//! the session. Styling (colours, shake / bounce animations, the banana-fly
//! effect) is left to the host page's CSS via the classes set here.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::alphabet::Letter;
use crate::quiz::{QuizEvent, QuizSession};

const ROOT_ID: &str = "bq-root";

/// Runtime view state: the session plus handles to the elements we update.
struct GameView {
    session: QuizSession,
    buttons: Vec<Element>,
    prompt: Element,
    counter: Element,
    progress_fill: Element,
    mascot: Element,
}

thread_local! {
    static GAME: RefCell<Option<GameView>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub(crate) fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn with_game(f: impl FnOnce(&mut GameView)) {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            f(game);
        }
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Answer(Letter),
    Next,
    Previous,
}

/// Map a keydown to a quiz action. Auto-repeat and shortcut chords
/// (`held` = repeat or ctrl/meta/alt down) are ignored.
fn key_action(key: &str, held: bool) -> Option<KeyAction> {
    if held {
        return None;
    }
    match key {
        "ArrowRight" => Some(KeyAction::Next),
        "ArrowLeft" => Some(KeyAction::Previous),
        _ => key.parse::<Letter>().ok().map(KeyAction::Answer),
    }
}

fn create_child(doc: &Document, parent: &Element, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    parent.append_child(&el)?;
    Ok(el)
}

pub(crate) fn mount(session: QuizSession) -> Result<(), JsValue> {
    if GAME.with(|cell| cell.borrow().is_some()) {
        warn!("banana quest already mounted, ignoring start_game");
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Reuse the host page's container if it provides one.
    let root: Element = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => el,
        None => {
            let el = doc.create_element("div")?;
            el.set_id(ROOT_ID);
            body.append_child(&el)?;
            el
        }
    };
    root.set_inner_html("");

    let header = create_child(&doc, &root, "div", "bq-header")?;
    let mascot = create_child(&doc, &header, "div", "bq-mascot neutral")?;
    let counter = create_child(&doc, &header, "div", "bq-counter")?;
    let prompt = create_child(&doc, &root, "h2", "bq-prompt")?;
    let progress = create_child(&doc, &root, "div", "bq-progress")?;
    let progress_fill = create_child(&doc, &progress, "div", "bq-progress-fill")?;

    let grid = create_child(&doc, &root, "div", "bq-grid")?;
    let mut buttons = Vec::with_capacity(crate::alphabet::ALPHABET_LEN);
    for letter in Letter::all() {
        let button = create_child(&doc, &grid, "button", "bq-letter")?;
        button.set_attribute("type", "button")?;
        button.set_attribute("aria-label", &format!("Letter {letter}"))?;
        button.set_text_content(Some(&letter.to_string()));
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_game(|game| {
                game.session.submit_answer(letter, performance_now());
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        buttons.push(button);
    }

    let controls = create_child(&doc, &root, "div", "bq-controls")?;
    for (label, forward) in [("Previous", false), ("Next Question", true)] {
        let button = create_child(&doc, &controls, "button", "bq-nav")?;
        button.set_text_content(Some(label));
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_game(|game| {
                if forward {
                    game.session.advance();
                } else {
                    game.session.retreat();
                }
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard: letter keys answer, arrows navigate.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let action = key_action(
                &evt.key(),
                evt.repeat() || evt.ctrl_key() || evt.meta_key() || evt.alt_key(),
            );
            with_game(|game| match action {
                Some(KeyAction::Next) => game.session.advance(),
                Some(KeyAction::Previous) => game.session.retreat(),
                Some(KeyAction::Answer(letter)) => {
                    game.session.submit_answer(letter, performance_now());
                }
                None => {}
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let mut view = GameView { session, buttons, prompt, counter, progress_fill, mascot };
    render(&mut view);
    GAME.with(|cell| cell.replace(Some(view)));
    start_loop();
    info!("banana quest mounted");
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_game(|game| {
            game.session.tick(ts);
            render(game);
        });
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn render(game: &mut GameView) {
    let snap = game.session.snapshot();

    for (letter, button) in Letter::all().zip(&game.buttons) {
        let class = match snap.feedback.get(&letter.as_char()).and_then(|f| f.css_class()) {
            Some(state) => format!("bq-letter {state}"),
            None => "bq-letter".to_string(),
        };
        if button.class_name() != class {
            button.set_class_name(&class);
        }
    }

    let prompt = match (snap.finished, snap.target) {
        (true, _) => "You found every letter!".to_string(),
        (false, Some(target)) => format!("Find the letter: {target}"),
        (false, None) => String::new(),
    };
    game.prompt.set_text_content(Some(&prompt));
    game.counter.set_text_content(Some(&snap.reward_count.to_string()));
    if let Err(err) = game
        .progress_fill
        .set_attribute("style", &format!("width:{}%", snap.progress_percent))
    {
        warn!("progress bar update failed: {err:?}");
    }

    let mood = snap.mood.css_class();
    let sparkle = if snap.sparkles { " sparkles" } else { "" };
    game.mascot.set_class_name(&format!("bq-mascot {mood}{sparkle}"));

    for event in game.session.drain_events() {
        if let QuizEvent::RewardEarned { .. } = event {
            // Re-adding the class restarts the CSS banana-fly animation.
            let classes = game.counter.class_list();
            let _ = classes.remove_1("banana-fly");
            let _ = game.counter.client_width();
            let _ = classes.add_1("banana-fly");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_action_maps_letters_and_arrows() {
        let a = Letter::try_from('A').unwrap();
        assert_eq!(key_action("a", false), Some(KeyAction::Answer(a)));
        assert_eq!(key_action("A", false), Some(KeyAction::Answer(a)));
        assert_eq!(key_action("ArrowRight", false), Some(KeyAction::Next));
        assert_eq!(key_action("ArrowLeft", false), Some(KeyAction::Previous));
        assert_eq!(key_action("Enter", false), None);
        assert_eq!(key_action("5", false), None);
    }

    #[test]
    fn test_key_action_ignores_repeats_and_chords() {
        assert_eq!(key_action("a", true), None);
        assert_eq!(key_action("r", true), None);
        assert_eq!(key_action("ArrowRight", true), None);
    }
}
