// Browser implementations of the scheduler and clock ports.
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::clock::{Clock, LocalTime};
use crate::scheduler::{Scheduler, TimerHandle, Wake};

/// `setTimeout` / `setInterval` backed scheduler. Fired timers are delivered
/// through [`super::with_page`].
#[derive(Default)]
pub(crate) struct WebScheduler {
    next_id: u64,
    timeouts: HashMap<TimerHandle, i32>,
    intervals: HashMap<TimerHandle, (i32, Closure<dyn FnMut()>)>,
}

impl WebScheduler {
    fn next_handle(&mut self) -> TimerHandle {
        self.next_id += 1;
        TimerHandle(self.next_id)
    }
}

fn deliver(wake: Wake) {
    super::with_page(|page| page.app.on_wake(wake));
}

impl Scheduler for WebScheduler {
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerHandle {
        let handle = self.next_handle();
        // One-shot closures free themselves after the call.
        let cb = Closure::once_into_js(move || deliver(wake));
        let armed = window().ok_or_else(|| JsValue::from_str("no window")).and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms as i32)
        });
        match armed {
            Ok(js_id) => {
                self.timeouts.insert(handle, js_id);
            }
            Err(e) => log::error!("setTimeout failed for {:?}: {:?}", wake, e),
        }
        handle
    }

    fn set_interval(&mut self, interval_ms: u32, wake: Wake) -> TimerHandle {
        let handle = self.next_handle();
        let cb = Closure::wrap(Box::new(move || deliver(wake)) as Box<dyn FnMut()>);
        let armed = window().ok_or_else(|| JsValue::from_str("no window")).and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
        });
        match armed {
            Ok(js_id) => {
                self.intervals.insert(handle, (js_id, cb));
            }
            Err(e) => log::error!("setInterval failed for {:?}: {:?}", wake, e),
        }
        handle
    }

    fn clear(&mut self, handle: TimerHandle) {
        let Some(win) = window() else { return };
        if let Some(js_id) = self.timeouts.remove(&handle) {
            win.clear_timeout_with_handle(js_id);
        }
        // Interval callbacks never clear themselves, so dropping the closure
        // here cannot free it mid-call.
        if let Some((js_id, _cb)) = self.intervals.remove(&handle) {
            win.clear_interval_with_handle(js_id);
        }
    }
}

/// Local wall clock from `Date`.
pub(crate) struct JsClock;

impl Clock for JsClock {
    fn local_time(&self) -> LocalTime {
        let now = js_sys::Date::new_0();
        LocalTime::new(now.get_hours() as u8, now.get_minutes() as u8)
    }
}
