//! Application Context
//!
//! View-layer signals provided via the Leptos Context API. Holds the
//! transient highlight flash for freshly added rows; the state core is
//! not involved.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a freshly added row keeps its highlight class
const FLASH_MS: u32 = 500;

/// App-wide view signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item id currently flashed as newly added - read
    pub flashed_item: ReadSignal<Option<u64>>,
    /// Item id currently flashed as newly added - write
    set_flashed_item: WriteSignal<Option<u64>>,
}

impl AppContext {
    pub fn new(flashed_item: (ReadSignal<Option<u64>>, WriteSignal<Option<u64>>)) -> Self {
        Self {
            flashed_item: flashed_item.0,
            set_flashed_item: flashed_item.1,
        }
    }

    /// Flash a newly added item, clearing the flag after a short delay.
    /// A newer flash wins; the stale timer leaves it alone.
    pub fn flash_item(&self, id: u64) {
        let set_flashed = self.set_flashed_item;
        set_flashed.set(Some(id));
        spawn_local(async move {
            TimeoutFuture::new(FLASH_MS).await;
            set_flashed.update(|current| {
                if *current == Some(id) {
                    *current = None;
                }
            });
        });
    }
}
