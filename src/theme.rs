use crate::constants::{SOUND_TOGGLE_ID, THEME_TOGGLE_ID};
use crate::dom::{self, Listeners};
use crate::sound::SharedSounds;
use crate::ui;
use folio_core::{backdrop_for, SectionInfo, Theme, ThemeStore, ThemeSubscription, CLICK};
use web_sys as web;

/// Applies the theme to the document and owns the global toggle buttons.
pub struct ThemeView {
    _subscription: ThemeSubscription,
    _listeners: Listeners,
}

impl ThemeView {
    pub fn mount(
        document: &web::Document,
        sections: &[SectionInfo],
        themes: &ThemeStore,
        sounds: &SharedSounds,
    ) -> Self {
        apply_theme(document, sections, themes.get());
        let doc = document.clone();
        let sections = sections.to_vec();
        let subscription = themes.subscribe(move |theme| apply_theme(&doc, &sections, theme));

        let mut listeners = Listeners::default();
        let store = themes.clone();
        let click = sounds.clone();
        listeners.push(dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
            click.borrow_mut().cue(CLICK);
            store.toggle();
        }));

        let sound_button = dom::by_id(document, SOUND_TOGGLE_ID);
        if let Some(button) = &sound_button {
            render_sound_toggle(button, sounds.borrow().is_enabled());
        }
        let toggling = sounds.clone();
        listeners.push(dom::add_click_listener(document, SOUND_TOGGLE_ID, move || {
            let enabled = toggling.borrow_mut().toggle();
            if let Some(button) = &sound_button {
                render_sound_toggle(button, enabled);
            }
        }));

        Self {
            _subscription: subscription,
            _listeners: listeners,
        }
    }
}

fn apply_theme(document: &web::Document, sections: &[SectionInfo], theme: Theme) {
    if let Some(body) = document.body() {
        dom::set_class(&body, theme.toggled().css_class(), false);
        dom::set_class(&body, theme.css_class(), true);
    }
    for (i, info) in sections.iter().enumerate() {
        let Some(path) = backdrop_for(i, theme) else {
            continue;
        };
        let Some(el) = dom::by_id(document, info.element_id) else {
            continue;
        };
        dom::set_style(&el, "background-image", &ui::backdrop_css(path));
    }
    if let Some(button) = dom::by_id(document, THEME_TOGGLE_ID) {
        _ = button.set_attribute("title", ui::theme_toggle_title(theme));
        _ = button.set_attribute("data-theme", theme.name());
    }
}

fn render_sound_toggle(button: &web::Element, enabled: bool) {
    _ = button.set_attribute("title", ui::sound_toggle_title(enabled));
    _ = button.set_attribute("aria-pressed", if enabled { "false" } else { "true" });
}
