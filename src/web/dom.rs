//! Page bindings: mount points looked up once, and the renderer that turns
//! [`Effect`]s into class / style / text changes.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::effect::{Effect, Screen};
use crate::mood_log::MoodLogEntry;
use crate::particles::Particle;
use crate::theme::Theme;

const HIDDEN: &str = "hidden";
const FADE_IN: &str = "fade-in";
const FADE_OUT: &str = "fade-out";
const ACTIVE: &str = "active";
const EXPLODED: &str = "exploded";
/// Attribute tying a particle element back to its core id.
pub(crate) const PARTICLE_ID_ATTR: &str = "data-particle-id";

pub(crate) struct Dom {
    doc: Document,
    body: HtmlElement,
    screen_name: Element,
    screen_greeting: Element,
    screen_mood: Element,
    name_input: HtmlInputElement,
    greeting_text: Element,
    mood_log: Element,
    mood_log_entries: Element,
    chaos_meter: Element,
    chaos_meter_fill: HtmlElement,
    chaos_meter_pct: Element,
    pub(crate) btn_enter: Element,
    pub(crate) btn_reset: Element,
    pub(crate) theme_buttons: Vec<(Theme, Element)>,
    particles: HashMap<u64, Element>,
}

fn by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing mount point #{}", id)))
}

impl Dom {
    pub(crate) fn bind(doc: &Document) -> Result<Self, JsValue> {
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let mut theme_buttons = Vec::with_capacity(Theme::ALL.len());
        for theme in Theme::ALL {
            theme_buttons.push((theme, by_id(doc, &format!("btn-{}", theme.class()))?));
        }
        Ok(Self {
            doc: doc.clone(),
            body,
            screen_name: by_id(doc, "screen-name")?,
            screen_greeting: by_id(doc, "screen-greeting")?,
            screen_mood: by_id(doc, "screen-mood")?,
            name_input: by_id(doc, "name-input")?.dyn_into()?,
            greeting_text: by_id(doc, "greeting-text")?,
            mood_log: by_id(doc, "mood-log")?,
            mood_log_entries: by_id(doc, "mood-log-entries")?,
            chaos_meter: by_id(doc, "chaos-meter")?,
            chaos_meter_fill: by_id(doc, "chaos-meter-fill")?.dyn_into()?,
            chaos_meter_pct: by_id(doc, "chaos-meter-pct")?,
            btn_enter: by_id(doc, "btn-enter")?,
            btn_reset: by_id(doc, "btn-reset")?,
            theme_buttons,
            particles: HashMap::new(),
        })
    }

    pub(crate) fn body(&self) -> &HtmlElement {
        &self.body
    }

    pub(crate) fn name_input(&self) -> &HtmlInputElement {
        &self.name_input
    }

    fn screen(&self, screen: Screen) -> &Element {
        match screen {
            Screen::Name => &self.screen_name,
            Screen::Greeting => &self.screen_greeting,
            Screen::Mood => &self.screen_mood,
        }
    }

    pub(crate) fn apply_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(e) = self.apply(&effect) {
                log::error!("failed to render {:?}: {:?}", effect, e);
            }
        }
    }

    fn apply(&mut self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::FocusNameInput => self.name_input.focus()?,
            Effect::FadeOut(s) => self.screen(*s).class_list().add_1(FADE_OUT)?,
            Effect::Hide(s) => {
                let classes = self.screen(*s).class_list();
                classes.add_1(HIDDEN)?;
                classes.remove_2(FADE_OUT, FADE_IN)?;
            }
            Effect::Show(s) => {
                let classes = self.screen(*s).class_list();
                classes.remove_1(HIDDEN)?;
                classes.add_1(FADE_IN)?;
            }
            Effect::SetGreeting(text) => self.greeting_text.set_text_content(Some(text.as_str())),
            Effect::RevealPanels => {
                self.mood_log.class_list().remove_1(HIDDEN)?;
                self.chaos_meter.class_list().remove_1(HIDDEN)?;
            }
            Effect::ApplyTheme(active) => self.apply_theme(*active)?,
            Effect::SpawnParticle(p) => self.spawn_particle(p)?,
            Effect::ClearParticles => {
                for (_, el) in self.particles.drain() {
                    el.remove();
                }
            }
            Effect::AppendLog(entry) => self.append_log(entry)?,
            Effect::SetChaosLevel(level) => {
                let pct = format!("{}%", level);
                self.chaos_meter_fill.style().set_property("height", &pct)?;
                self.chaos_meter_pct.set_text_content(Some(pct.as_str()));
            }
            Effect::SetExploded(on) => {
                self.body.class_list().toggle_with_force(EXPLODED, *on)?;
            }
            Effect::SetResetVisible(on) => {
                self.btn_reset.class_list().toggle_with_force(HIDDEN, !*on)?;
            }
        }
        Ok(())
    }

    fn apply_theme(&self, active: Option<Theme>) -> Result<(), JsValue> {
        let body_classes = self.body.class_list();
        for (theme, button) in &self.theme_buttons {
            body_classes.remove_1(theme.class())?;
            button.class_list().remove_1(ACTIVE)?;
        }
        if let Some(theme) = active {
            body_classes.add_1(theme.class())?;
            if let Some((_, button)) = self.theme_buttons.iter().find(|(t, _)| *t == theme) {
                button.class_list().add_1(ACTIVE)?;
            }
        }
        Ok(())
    }

    fn spawn_particle(&mut self, p: &Particle) -> Result<(), JsValue> {
        let el: HtmlElement = self.doc.create_element("span")?.dyn_into()?;
        el.class_list().add_1(p.kind.class())?;
        el.set_text_content(Some(p.text));
        el.set_attribute(PARTICLE_ID_ATTR, &p.id.to_string())?;
        let style = el.style();
        style.set_property("left", &format!("{}%", p.left_pct))?;
        style.set_property("top", &format!("{}%", p.top_pct))?;
        style.set_property("font-size", &format!("{}rem", p.size_rem))?;
        if let Some(color) = p.color {
            style.set_property("color", color)?;
        }
        self.body.append_child(&el)?;
        self.particles.insert(p.id, el.into());
        Ok(())
    }

    /// Animation finished: drop the element. Unknown ids were already swept.
    pub(crate) fn particle_ended(&mut self, id: u64) {
        if let Some(el) = self.particles.remove(&id) {
            el.remove();
        }
    }

    fn append_log(&self, entry: &MoodLogEntry) -> Result<(), JsValue> {
        let row = self.doc.create_element("div")?;
        row.class_list().add_1("mood-log-entry")?;
        let time = entry.time.to_string();
        for (class, text) in [("log-emoji", entry.glyph), ("log-text", entry.label), ("log-time", time.as_str())] {
            let span = self.doc.create_element("span")?;
            span.class_list().add_1(class)?;
            span.set_text_content(Some(text));
            row.append_child(&span)?;
        }
        self.mood_log_entries.append_child(&row)?;
        self.mood_log_entries
            .set_scroll_top(self.mood_log_entries.scroll_height());
        Ok(())
    }

    /// The mood screen keeps its entrance class only until the animation ends,
    /// otherwise it would fight the theme animations.
    pub(crate) fn mood_entrance_done(&self) {
        if let Err(e) = self.screen_mood.class_list().remove_1(FADE_IN) {
            log::error!("failed to clear mood fade-in: {:?}", e);
        }
    }
}
