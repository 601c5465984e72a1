//! Light/Dark world theme and the context object that broadcasts it.
//!
//! There is exactly one [`ThemeStore`] per page. Components hold a clone of the
//! handle, read the current value with [`ThemeStore::get`] and react to changes
//! through [`ThemeStore::subscribe`]. Only [`ThemeStore::toggle`] and
//! [`ThemeStore::set`] mutate it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// One of the two visual worlds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to the document body while this theme is active.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(Theme)>>;

struct ThemeInner {
    theme: Cell<Theme>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the page theme. Cloning shares the same state.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<ThemeInner>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Rc::new(ThemeInner {
                theme: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> Theme {
        self.inner.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }

    /// Flip Light/Dark and notify subscribers. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Set the theme. Subscribers are only notified when the value changes.
    pub fn set(&self, theme: Theme) {
        if self.inner.theme.replace(theme) == theme {
            return;
        }
        log::info!("[theme] switched to {}", theme.name());
        // Snapshot so listeners may subscribe/unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut f) => f(theme),
                Err(_) => log::warn!("[theme] re-entrant change skipped a listener"),
            }
        }
    }

    /// Register a listener called after every change. The listener stays
    /// registered until the returned subscription is dropped.
    pub fn subscribe(&self, listener: impl FnMut(Theme) + 'static) -> ThemeSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let listener: Listener = Rc::new(RefCell::new(listener));
        self.inner.listeners.borrow_mut().push((id, listener));
        ThemeSubscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Keeps a theme listener registered; dropping it deregisters.
#[must_use = "dropping the subscription deregisters the listener"]
pub struct ThemeSubscription {
    store: Weak<ThemeInner>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Section background image per theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backdrop {
    pub light: &'static str,
    pub dark: &'static str,
}

impl Backdrop {
    pub fn for_theme(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

const DUNGEON: &str = "/images/dungeon-bg.jpg";

/// Backdrops indexed by section (Hero, About, Projects, Links, Contact).
/// Links sits on the page gradient and has no image.
pub const SECTION_BACKDROPS: [Option<Backdrop>; 5] = [
    Some(Backdrop {
        light: "/images/hero-sky.jpg",
        dark: DUNGEON,
    }),
    Some(Backdrop {
        light: "/images/floating-island.jpg",
        dark: "/images/dungeon-about.jpg",
    }),
    Some(Backdrop {
        light: "/images/waterfall-scene.jpg",
        dark: DUNGEON,
    }),
    None,
    Some(Backdrop {
        light: "/images/shrine-gate.jpg",
        dark: DUNGEON,
    }),
];

pub fn backdrop_for(section: usize, theme: Theme) -> Option<&'static str> {
    SECTION_BACKDROPS
        .get(section)
        .copied()
        .flatten()
        .map(|b| b.for_theme(theme))
}

/// Every distinct backdrop path across both themes, in table order.
pub fn backdrop_assets() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for b in SECTION_BACKDROPS.iter().flatten() {
        for path in [b.light, b.dark] {
            if !out.contains(&path) {
                out.push(path);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn backdrop_assets_are_unique() {
        let assets = backdrop_assets();
        let mut sorted = assets.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), assets.len());
        assert!(assets.contains(&DUNGEON));
    }

    #[test]
    fn missing_backdrop_is_none() {
        assert_eq!(backdrop_for(3, Theme::Dark), None);
        assert_eq!(backdrop_for(99, Theme::Light), None);
        assert_eq!(backdrop_for(0, Theme::Dark), Some(DUNGEON));
    }
}
