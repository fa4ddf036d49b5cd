//! Browser host: wires DOM events to the [`App`] and renders its effects.
//!
//! The session lives in a thread-local (the page is single threaded); every
//! callback goes through [`with_page`], which runs the input and then flushes
//! the effect outbox to the DOM before returning to the event loop.

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, window};

use crate::app::App;

mod dom;
mod timers;

use dom::{Dom, PARTICLE_ID_ATTR};
use timers::{JsClock, WebScheduler};

type WebApp = App<WebScheduler, JsClock, SmallRng>;

pub(crate) struct Page {
    pub(crate) app: WebApp,
    dom: Dom,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Run `f` against the live page, then apply whatever it emitted.
pub(crate) fn with_page(f: impl FnOnce(&mut Page)) {
    PAGE.with(|cell| {
        if let Some(page) = cell.borrow_mut().as_mut() {
            f(page);
            let effects = page.app.take_effects();
            page.dom.apply_all(effects);
        }
    });
}

/// Bind the mount points and start listening. Calling it again is a no-op.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    if PAGE.with(|cell| cell.borrow().is_some()) {
        log::warn!("start_app called twice; ignoring");
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let dom = Dom::bind(&doc)?;

    listen(&dom.btn_enter, "click", |_| submit_from_input())?;
    listen(dom.name_input(), "keydown", |evt| {
        if evt.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Enter") {
            submit_from_input();
        }
    })?;
    for (theme, button) in &dom.theme_buttons {
        let theme = *theme;
        listen(button, "click", move |_| with_page(|page| page.app.select_theme(theme)))?;
    }
    listen(&dom.btn_reset, "click", |_| {
        with_page(|page| {
            page.app.reset();
        })
    })?;
    // animationend bubbles, so one body listener covers every particle and the
    // mood screen entrance.
    listen(dom.body(), "animationend", on_animation_end)?;

    let app = App::new(WebScheduler::default(), JsClock, seed_rng());
    PAGE.with(|cell| cell.replace(Some(Page { app, dom })));
    log::info!("mood toy ready");
    Ok(())
}

/// Current session as JSON (for debugging from the console).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    PAGE.with(|cell| match cell.borrow().as_ref() {
        Some(page) => serde_json::to_string(&page.app.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string())),
        None => Err(JsValue::from_str("app not started")),
    })
}

fn submit_from_input() {
    with_page(|page| {
        let raw = page.dom.name_input().value();
        page.app.submit_name(&raw);
    });
}

fn on_animation_end(evt: Event) {
    let Some(target) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    if target.id() == "screen-mood" {
        with_page(|page| page.dom.mood_entrance_done());
        return;
    }
    let Some(id) = target
        .get_attribute(PARTICLE_ID_ATTR)
        .and_then(|raw| raw.parse::<u64>().ok())
    else {
        return;
    };
    with_page(|page| {
        page.dom.particle_ended(id);
        page.app.particle_finished(id);
    });
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn seed_rng() -> SmallRng {
    #[cfg(feature = "rng")]
    {
        let mut seed = [0u8; 8];
        match getrandom::getrandom(&mut seed) {
            Ok(()) => return SmallRng::seed_from_u64(u64::from_le_bytes(seed)),
            Err(e) => log::warn!("getrandom unavailable ({}), seeding from clock", e),
        }
    }
    SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ crate::performance_now().to_bits())
}
